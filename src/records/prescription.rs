use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{or_dash, ListRecord};
use crate::data::comparator::SortDirection;
use crate::data::field_value::FieldValue;
use crate::data::schema::ListSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: u32,
    pub patient_name: String,
    pub doctor_name: String,
    pub diagnosis: String,
    pub medication: String,
    #[serde(default)]
    pub dosage: Option<String>,
    /// ACTIVE, COMPLETED or CANCELLED
    pub status: String,
    pub issued_at: NaiveDate,
}

impl ListRecord for Prescription {
    const SCREEN: &'static str = "prescriptions";
    const ENDPOINT: &'static str = "prescriptions";

    fn schema() -> ListSchema<Self> {
        ListSchema::new()
            .numeric_field("id", |p: &Prescription| FieldValue::from(p.id))
            .text_field("patient", |p: &Prescription| FieldValue::from(&p.patient_name))
            .text_field("doctor", |p: &Prescription| FieldValue::from(&p.doctor_name))
            .text_field("diagnosis", |p: &Prescription| FieldValue::from(&p.diagnosis))
            .text_field("medication", |p: &Prescription| FieldValue::from(&p.medication))
            .text_field("status", |p: &Prescription| FieldValue::from(&p.status))
            .date_field("date", |p: &Prescription| FieldValue::from(p.issued_at))
            .searchable(&["patient", "doctor", "diagnosis", "medication"])
            .filterable(&["status", "doctor"])
            .sortable(&["id", "patient", "diagnosis", "date"])
            .default_sort("date", SortDirection::Descending)
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Patient", "Doctor", "Diagnosis", "Medication", "Dosage", "Status", "Issued"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.patient_name.clone(),
            self.doctor_name.clone(),
            self.diagnosis.clone(),
            self.medication.clone(),
            or_dash(&self.dosage),
            self.status.clone(),
            self.issued_at.format("%Y-%m-%d").to_string(),
        ]
    }
}
