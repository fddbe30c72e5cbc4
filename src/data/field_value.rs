use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How a field's values are compared when the list is sorted by it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Numeric,
    Date,
}

/// A single value pulled out of a record by a field extractor
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// String form used for search matching, filter equality and display.
    /// Null renders as the empty string.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Date(d) => {
                if d.timestamp() % 86_400 == 0 {
                    d.format("%Y-%m-%d").to_string()
                } else {
                    d.format("%Y-%m-%d %H:%M").to_string()
                }
            }
            FieldValue::Null => String::new(),
        }
    }

    /// Numeric reading of the value. Unparseable text and null read as 0.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse().unwrap_or(0.0),
            FieldValue::Date(d) => d.timestamp_millis() as f64,
            FieldValue::Null => 0.0,
        }
    }

    /// Milliseconds since the epoch. Anything that is not a date reads as epoch-0.
    pub fn as_epoch_millis(&self) -> i64 {
        match self {
            FieldValue::Date(d) => d.timestamp_millis(),
            FieldValue::Text(s) => parse_date(s).map(|d| d.timestamp_millis()).unwrap_or(0),
            FieldValue::Number(n) if n.is_finite() => *n as i64,
            _ => 0,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM[:SS]` and plain `YYYY-MM-DD`
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Collation key for text sorting.
///
/// Primary: base letters with diacritics stripped and case folded, with `đ`
/// ordered as its own letter right after `d`. Secondary: case-folded text
/// with diacritics kept. Last: the raw string, so the order is total.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextKey {
    primary: Vec<u32>,
    secondary: String,
    raw: String,
}

impl TextKey {
    pub fn new(s: &str) -> Self {
        let primary = s
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .map(letter_weight)
            .collect();
        let secondary = s.nfd().flat_map(char::to_lowercase).collect();

        Self {
            primary,
            secondary,
            raw: s.to_string(),
        }
    }
}

fn letter_weight(c: char) -> u32 {
    match c {
        'đ' => ('d' as u32) * 2 + 1,
        c => (c as u32) * 2,
    }
}

/// Locale-style text ordering, see [`TextKey`]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    TextKey::new(a).cmp(&TextKey::new(b))
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::Text(s.clone())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Text(b.to_string())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(d: DateTime<Utc>) -> Self {
        FieldValue::Date(d)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(d: NaiveDateTime) -> Self {
        FieldValue::Date(Utc.from_utc_datetime(&d))
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        d.and_hms_opt(0, 0, 0)
            .map(FieldValue::from)
            .unwrap_or(FieldValue::Null)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(v: Option<V>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}
