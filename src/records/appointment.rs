use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{or_dash, ListRecord};
use crate::data::comparator::SortDirection;
use crate::data::field_value::FieldValue;
use crate::data::schema::ListSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u32,
    pub patient_name: String,
    pub doctor_name: String,
    pub department: String,
    pub scheduled_at: NaiveDateTime,
    /// SCHEDULED, COMPLETED or CANCELLED
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ListRecord for Appointment {
    const SCREEN: &'static str = "appointments";
    const ENDPOINT: &'static str = "appointments";

    fn schema() -> ListSchema<Self> {
        ListSchema::new()
            .numeric_field("id", |a: &Appointment| FieldValue::from(a.id))
            .text_field("patient", |a: &Appointment| FieldValue::from(&a.patient_name))
            .text_field("doctor", |a: &Appointment| FieldValue::from(&a.doctor_name))
            .text_field("department", |a: &Appointment| FieldValue::from(&a.department))
            .date_field("date", |a: &Appointment| FieldValue::from(a.scheduled_at))
            .text_field("status", |a: &Appointment| FieldValue::from(&a.status))
            .text_field("reason", |a: &Appointment| FieldValue::from(a.reason.as_deref()))
            .searchable(&["patient", "doctor", "reason"])
            .filterable(&["status", "department", "doctor"])
            .sortable(&["date", "patient", "doctor"])
            .default_sort("date", SortDirection::Ascending)
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Patient", "Doctor", "Department", "When", "Status", "Reason"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.patient_name.clone(),
            self.doctor_name.clone(),
            self.department.clone(),
            self.scheduled_at.format("%Y-%m-%d %H:%M").to_string(),
            self.status.clone(),
            or_dash(&self.reason),
        ]
    }
}
