use serde::{Deserialize, Serialize};

use super::{or_dash, ListRecord};
use crate::data::comparator::SortDirection;
use crate::data::field_value::FieldValue;
use crate::data::schema::ListSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: u32,
    pub patient_name: String,
    pub contact_name: String,
    pub relationship: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl ListRecord for EmergencyContact {
    const SCREEN: &'static str = "contacts";
    const ENDPOINT: &'static str = "emergency-contacts";

    fn schema() -> ListSchema<Self> {
        ListSchema::new()
            .text_field("patient", |c: &EmergencyContact| FieldValue::from(&c.patient_name))
            .text_field("name", |c: &EmergencyContact| FieldValue::from(&c.contact_name))
            .text_field("relationship", |c: &EmergencyContact| {
                FieldValue::from(&c.relationship)
            })
            .text_field("phone", |c: &EmergencyContact| FieldValue::from(&c.phone))
            .text_field("email", |c: &EmergencyContact| FieldValue::from(c.email.as_deref()))
            .searchable(&["patient", "name", "phone", "email"])
            .filterable(&["relationship"])
            .sortable(&["patient", "name"])
            .default_sort("name", SortDirection::Ascending)
    }

    fn headers() -> &'static [&'static str] {
        &["Patient", "Contact", "Relationship", "Phone", "Email"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.patient_name.clone(),
            self.contact_name.clone(),
            self.relationship.clone(),
            self.phone.clone(),
            or_dash(&self.email),
        ]
    }
}
