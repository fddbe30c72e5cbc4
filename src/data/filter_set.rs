use std::collections::BTreeMap;

use crate::data::schema::ListSchema;

/// Exact-match constraints keyed by field name, combined with logical AND.
/// An empty accepted value means the field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    constraints: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear (with "") the accepted value for a field
    pub fn set(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.constraints.remove(field);
        } else {
            self.constraints.insert(field.to_string(), value.to_string());
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.constraints.get(field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.constraints.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.constraints
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A record passes iff every constrained field's value equals its accepted value.
    /// Constraints on fields the schema does not know reject every record.
    pub fn matches<T>(&self, schema: &ListSchema<T>, record: &T) -> bool {
        self.constraints.iter().all(|(field, accepted)| {
            schema
                .get(field)
                .map(|spec| spec.extract(record).as_text() == *accepted)
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::field_value::FieldValue;

    struct Staff {
        role: &'static str,
        department: &'static str,
    }

    fn schema() -> ListSchema<Staff> {
        ListSchema::new()
            .text_field("role", |s: &Staff| FieldValue::from(s.role))
            .text_field("department", |s: &Staff| FieldValue::from(s.department))
            .filterable(&["role", "department"])
    }

    #[test]
    fn test_empty_filter_set_passes_everything() {
        let filters = FilterSet::new();
        let staff = Staff {
            role: "NURSE",
            department: "ER",
        };
        assert!(filters.matches(&schema(), &staff));
    }

    #[test]
    fn test_and_composition() {
        let schema = schema();
        let mut filters = FilterSet::new();
        filters.set("role", "DOCTOR");
        filters.set("department", "Cardiology");
        assert_eq!(filters.len(), 2);

        let both = Staff {
            role: "DOCTOR",
            department: "Cardiology",
        };
        let one = Staff {
            role: "DOCTOR",
            department: "Neurology",
        };
        assert!(filters.matches(&schema, &both));
        assert!(!filters.matches(&schema, &one));

        filters.set("department", "");
        assert_eq!(filters.get("department"), None);
        assert!(filters.matches(&schema, &one));
    }

    #[test]
    fn test_equality_is_exact() {
        let schema = schema();
        let mut filters = FilterSet::new();
        filters.set("role", "doctor");
        let staff = Staff {
            role: "DOCTOR",
            department: "ER",
        };
        assert!(!filters.matches(&schema, &staff));
    }

    #[test]
    fn test_clear() {
        let mut filters = FilterSet::new();
        filters.set("role", "DOCTOR");
        filters.clear();
        assert!(filters.is_empty());
    }
}
