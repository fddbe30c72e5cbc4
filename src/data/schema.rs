//! Field registry for a list screen
//!
//! A `ListSchema` maps field names to typed extractor functions and declares
//! which of those fields take part in search, exact-match filtering and
//! sorting. Every name is checked against the registry when the controller
//! is built, so a typo in a screen definition fails immediately instead of
//! silently matching nothing.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::data::comparator::SortDirection;
use crate::data::field_value::{FieldValue, ValueKind};
use crate::error::{ConfigError, FieldRole};

/// Pulls one field's value out of a record
pub type Extractor<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// A named, typed field of record type `T`
pub struct FieldSpec<T> {
    name: String,
    kind: ValueKind,
    extract: Extractor<T>,
}

impl<T> FieldSpec<T> {
    pub fn new<F>(name: &str, kind: ValueKind, extract: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            kind,
            extract: Arc::new(extract),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn extract(&self, record: &T) -> FieldValue {
        (self.extract)(record)
    }

    pub fn extractor(&self) -> Extractor<T> {
        Arc::clone(&self.extract)
    }
}

impl<T> Clone for FieldSpec<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Field configuration for one list screen
pub struct ListSchema<T> {
    fields: Vec<FieldSpec<T>>,
    searchable: Vec<String>,
    filterable: Vec<String>,
    sortable: Vec<String>,
    default_sort: Option<(String, SortDirection)>,
}

impl<T> Default for ListSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ListSchema<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            searchable: self.searchable.clone(),
            filterable: self.filterable.clone(),
            sortable: self.sortable.clone(),
            default_sort: self.default_sort.clone(),
        }
    }
}

impl<T> fmt::Debug for ListSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSchema")
            .field("fields", &self.fields)
            .field("searchable", &self.searchable)
            .field("filterable", &self.filterable)
            .field("sortable", &self.sortable)
            .field("default_sort", &self.default_sort)
            .finish()
    }
}

impl<T> ListSchema<T> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            searchable: Vec::new(),
            filterable: Vec::new(),
            sortable: Vec::new(),
            default_sort: None,
        }
    }

    /// Register a field with an explicit value kind
    pub fn field<F>(mut self, name: &str, kind: ValueKind, extract: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.fields.push(FieldSpec::new(name, kind, extract));
        self
    }

    pub fn text_field<F>(self, name: &str, extract: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.field(name, ValueKind::Text, extract)
    }

    pub fn numeric_field<F>(self, name: &str, extract: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.field(name, ValueKind::Numeric, extract)
    }

    pub fn date_field<F>(self, name: &str, extract: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.field(name, ValueKind::Date, extract)
    }

    /// Fields searched by the free-text box, in the order given
    pub fn searchable(mut self, names: &[&str]) -> Self {
        self.searchable.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Fields that accept exact-match filter constraints
    pub fn filterable(mut self, names: &[&str]) -> Self {
        self.filterable.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Fields that may be used as the sort key
    pub fn sortable(mut self, names: &[&str]) -> Self {
        self.sortable.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn default_sort(mut self, key: &str, direction: SortDirection) -> Self {
        self.default_sort = Some((key.to_string(), direction));
        self
    }

    /// Replace the default sort, e.g. with a per-screen override from config
    pub fn set_default_sort(&mut self, sort: Option<(String, SortDirection)>) {
        self.default_sort = sort;
    }

    /// Check that every referenced name resolves to exactly one extractor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::DuplicateField(field.name.clone()));
            }
        }

        let groups = [
            (FieldRole::Searchable, &self.searchable),
            (FieldRole::Filterable, &self.filterable),
            (FieldRole::Sortable, &self.sortable),
        ];
        for (role, names) in groups {
            if let Some(missing) = names.iter().find(|n| !seen.contains(n.as_str())) {
                return Err(ConfigError::UnknownField {
                    role,
                    field: missing.clone(),
                });
            }
        }

        if let Some((key, _)) = &self.default_sort {
            if !seen.contains(key.as_str()) {
                return Err(ConfigError::UnknownField {
                    role: FieldRole::DefaultSort,
                    field: key.clone(),
                });
            }
            if !self.is_sortable(key) {
                return Err(ConfigError::NotSortable(key.clone()));
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSpec<T>] {
        &self.fields
    }

    pub fn is_filterable(&self, name: &str) -> bool {
        self.filterable.iter().any(|n| n == name)
    }

    pub fn is_sortable(&self, name: &str) -> bool {
        self.sortable.iter().any(|n| n == name)
    }

    pub fn filterable_names(&self) -> &[String] {
        &self.filterable
    }

    pub fn sortable_names(&self) -> &[String] {
        &self.sortable
    }

    pub fn default_sort_key(&self) -> Option<&(String, SortDirection)> {
        self.default_sort.as_ref()
    }

    /// Extractors for the searchable fields, in declaration order.
    /// Unresolved names are skipped; `validate` reports them.
    pub fn search_extractors(&self) -> Vec<Extractor<T>> {
        self.searchable
            .iter()
            .filter_map(|name| self.get(name))
            .map(FieldSpec::extractor)
            .collect()
    }
}
