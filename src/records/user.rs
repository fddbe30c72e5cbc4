use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{or_dash, ListRecord};
use crate::data::comparator::SortDirection;
use crate::data::field_value::FieldValue;
use crate::data::schema::ListSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub full_name: String,
    pub email: String,
    /// ADMIN, DOCTOR, NURSE, RECEPTIONIST, ...
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    pub active: bool,
    pub created_at: NaiveDate,
}

impl User {
    fn status(&self) -> &'static str {
        if self.active {
            "ACTIVE"
        } else {
            "INACTIVE"
        }
    }
}

impl ListRecord for User {
    const SCREEN: &'static str = "users";
    const ENDPOINT: &'static str = "users";

    fn schema() -> ListSchema<Self> {
        ListSchema::new()
            .text_field("name", |u: &User| FieldValue::from(&u.full_name))
            .text_field("email", |u: &User| FieldValue::from(&u.email))
            .text_field("role", |u: &User| FieldValue::from(&u.role))
            .text_field("department", |u: &User| FieldValue::from(u.department.as_deref()))
            .text_field("status", |u: &User| FieldValue::from(u.status()))
            .date_field("created", |u: &User| FieldValue::from(u.created_at))
            .searchable(&["name", "email"])
            .filterable(&["role", "department", "status"])
            .sortable(&["name", "email", "created"])
            .default_sort("name", SortDirection::Ascending)
    }

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Role", "Department", "Status", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.email.clone(),
            self.role.clone(),
            or_dash(&self.department),
            self.status().to_string(),
            self.created_at.format("%Y-%m-%d").to_string(),
        ]
    }
}
