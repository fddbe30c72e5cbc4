use serde::{Deserialize, Serialize};

use super::ListRecord;
use crate::data::comparator::SortDirection;
use crate::data::field_value::FieldValue;
use crate::data::schema::ListSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub user_count: u32,
}

impl ListRecord for Role {
    const SCREEN: &'static str = "roles";
    const ENDPOINT: &'static str = "roles";

    fn schema() -> ListSchema<Self> {
        ListSchema::new()
            .text_field("name", |r: &Role| FieldValue::from(&r.name))
            .text_field("description", |r: &Role| FieldValue::from(&r.description))
            .text_field("permissions", |r: &Role| FieldValue::from(r.permissions.join(", ")))
            .numeric_field("users", |r: &Role| FieldValue::from(r.user_count))
            .numeric_field("permission_count", |r: &Role| {
                FieldValue::from(r.permissions.len() as i64)
            })
            .searchable(&["name", "description", "permissions"])
            .sortable(&["name", "users", "permission_count"])
            .default_sort("name", SortDirection::Ascending)
    }

    fn headers() -> &'static [&'static str] {
        &["Name", "Description", "Permissions", "Users"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.permissions.len().to_string(),
            self.user_count.to_string(),
        ]
    }
}
