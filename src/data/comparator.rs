use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::data::field_value::{FieldValue, TextKey, ValueKind};
use crate::data::schema::FieldSpec;
use crate::error::ConfigError;

/// Sort direction for the single active sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ConfigError::InvalidSortSpec(s.to_string())),
        }
    }
}

/// The active sort: one key and its direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: key.to_string(),
            direction,
        }
    }
}

/// Parse `"date"`, `"date:asc"` or `"date:desc"`
pub fn parse_sort_spec(spec: &str) -> Result<(String, SortDirection), ConfigError> {
    let (key, direction) = match spec.split_once(':') {
        Some((key, dir)) => (key.trim(), dir.parse::<SortDirection>()?),
        None => (spec.trim(), SortDirection::Ascending),
    };
    if key.is_empty() {
        return Err(ConfigError::InvalidSortSpec(spec.to_string()));
    }
    Ok((key.to_string(), direction))
}

/// Comparison value extracted once per record before sorting
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(TextKey),
    Number(f64),
    Millis(i64),
}

impl SortKey {
    /// Null reads as "" / 0 / epoch-0 depending on kind, so it sorts low.
    /// Non-finite numbers read as 0 as well.
    fn from_value(value: &FieldValue, kind: ValueKind) -> Self {
        match kind {
            ValueKind::Text => SortKey::Text(TextKey::new(&value.as_text())),
            ValueKind::Numeric => {
                let n = value.as_number();
                SortKey::Number(if n.is_finite() { n } else { 0.0 })
            }
            ValueKind::Date => SortKey::Millis(value.as_epoch_millis()),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Millis(a), SortKey::Millis(b)) => a.cmp(b),
            // A comparator only ever builds keys of one kind
            _ => Ordering::Equal,
        }
    }
}

/// Orders records by one field in one direction
pub struct Comparator<T> {
    field: FieldSpec<T>,
    direction: SortDirection,
}

impl<T> Comparator<T> {
    pub fn new(field: &FieldSpec<T>, direction: SortDirection) -> Self {
        Self {
            field: field.clone(),
            direction,
        }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let kind = self.field.kind();
        let key_a = SortKey::from_value(&self.field.extract(a), kind);
        let key_b = SortKey::from_value(&self.field.extract(b), kind);
        self.direction.apply(key_a.compare(&key_b))
    }

    /// Stable sort in place. Keys are extracted once per record and ties keep
    /// their input order in both directions.
    pub fn sort(&self, items: &mut Vec<&T>) {
        let kind = self.field.kind();
        let mut keyed: Vec<(SortKey, &T)> = items
            .drain(..)
            .map(|record| (SortKey::from_value(&self.field.extract(record), kind), record))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| self.direction.apply(a.compare(b)));

        items.extend(keyed.into_iter().map(|(_, record)| record));
    }
}
