pub mod config;
pub mod data;
pub mod debouncer;
pub mod error;
pub mod records;
pub mod utils;

pub use data::comparator::{SortDirection, SortState};
pub use data::field_value::{FieldValue, ValueKind};
pub use data::list_view::{DerivedView, ListViewController};
pub use data::schema::ListSchema;
pub use data::search_filter::SearchMode;
pub use error::{ConfigError, FetchError};
