//! List view data layer
//!
//! Building blocks for deriving a visible page from a fetched collection:
//! field extraction, search, filtering, sorting and pagination, plus the
//! controller that composes them and the sources that feed it.

// Building blocks
pub mod comparator;
pub mod field_value;
pub mod filter_set;
pub mod paginator;
pub mod schema;
pub mod search_filter;

// Controller
pub mod fetch;
pub mod list_view;

// Collection sources
pub mod data_source;
pub mod refresher;
