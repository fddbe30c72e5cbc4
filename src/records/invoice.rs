use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{or_dash, ListRecord};
use crate::data::comparator::SortDirection;
use crate::data::field_value::FieldValue;
use crate::data::schema::ListSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: u32,
    pub invoice_number: String,
    pub patient_name: String,
    pub amount: f64,
    /// PAID, UNPAID or PENDING
    pub status: String,
    pub issued_at: NaiveDate,
    #[serde(default)]
    pub due_at: Option<NaiveDate>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl ListRecord for Invoice {
    const SCREEN: &'static str = "invoices";
    const ENDPOINT: &'static str = "invoices";

    fn schema() -> ListSchema<Self> {
        ListSchema::new()
            .text_field("number", |i: &Invoice| FieldValue::from(&i.invoice_number))
            .text_field("patient", |i: &Invoice| FieldValue::from(&i.patient_name))
            .numeric_field("amount", |i: &Invoice| FieldValue::from(i.amount))
            .text_field("status", |i: &Invoice| FieldValue::from(&i.status))
            .date_field("date", |i: &Invoice| FieldValue::from(i.issued_at))
            .date_field("due", |i: &Invoice| FieldValue::from(i.due_at))
            .text_field("method", |i: &Invoice| {
                FieldValue::from(i.payment_method.as_deref())
            })
            .searchable(&["number", "patient"])
            .filterable(&["status", "method"])
            .sortable(&["number", "amount", "date", "due"])
            .default_sort("date", SortDirection::Descending)
    }

    fn headers() -> &'static [&'static str] {
        &["Number", "Patient", "Amount", "Status", "Issued", "Due", "Method"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.invoice_number.clone(),
            self.patient_name.clone(),
            format!("{:.2}", self.amount),
            self.status.clone(),
            self.issued_at.format("%Y-%m-%d").to_string(),
            self.due_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            or_dash(&self.payment_method),
        ]
    }
}
