//! Error types for list view construction and data fetching
//!
//! State transitions on a controller never fail. The only errors this crate
//! produces are misconfiguration detected when a controller is built and
//! failures reported by a data source at the fetch boundary.

use thiserror::Error;

/// Which part of a list schema referenced a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Searchable,
    Filterable,
    Sortable,
    DefaultSort,
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldRole::Searchable => "searchable",
            FieldRole::Filterable => "filterable",
            FieldRole::Sortable => "sortable",
            FieldRole::DefaultSort => "default sort",
        };
        f.write_str(name)
    }
}

/// Misconfiguration of a list view. Raised only at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),

    #[error("{role} field '{field}' has no registered extractor")]
    UnknownField { role: FieldRole, field: String },

    #[error("field '{0}' is registered more than once")]
    DuplicateField(String),

    #[error("default sort key '{0}' is not in the sortable set")]
    NotSortable(String),

    #[error("invalid sort specification '{0}', expected 'key' or 'key:asc|desc'")]
    InvalidSortSpec(String),
}

/// Failure of a data source call. Never clears an existing collection.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fetch was cancelled before completing")]
    Cancelled,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status {
                code: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::UnknownField {
            role: FieldRole::Sortable,
            field: "dob".to_string(),
        };
        assert_eq!(err.to_string(), "sortable field 'dob' has no registered extractor");
        assert_eq!(
            ConfigError::InvalidPageSize(0).to_string(),
            "page size must be a positive integer, got 0"
        );
    }

    #[test]
    fn test_decode_error_conversion() {
        let bad: Result<Vec<u32>, _> = serde_json::from_str("{not json");
        let err: FetchError = bad.unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
