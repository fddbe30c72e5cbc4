//! Record types for the hospital list screens
//!
//! Each record knows its screen name, REST endpoint, field schema and how to
//! render itself as a table row. `controller_for` turns that into a ready
//! list view with the configured page size and sort overrides applied.

use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::config::Config;
use crate::data::list_view::ListViewController;
use crate::data::schema::ListSchema;
use crate::error::ConfigError;

pub mod appointment;
pub mod contact;
pub mod invoice;
pub mod prescription;
pub mod role;
pub mod user;

pub use appointment::Appointment;
pub use contact::EmergencyContact;
pub use invoice::Invoice;
pub use prescription::Prescription;
pub use role::Role;
pub use user::User;

/// A record type shown by one list screen
pub trait ListRecord: DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Screen name, also the key for `[screens.<name>]` in config
    const SCREEN: &'static str;

    /// Path under the REST base URL that returns the collection
    const ENDPOINT: &'static str;

    fn schema() -> ListSchema<Self>;

    fn headers() -> &'static [&'static str];

    /// Display cells, one per header
    fn cells(&self) -> Vec<String>;
}

/// Screen names accepted by `controller_for` callers such as the CLI
pub const SCREENS: &[&str] = &[
    Prescription::SCREEN,
    Appointment::SCREEN,
    Invoice::SCREEN,
    EmergencyContact::SCREEN,
    User::SCREEN,
    Role::SCREEN,
];

/// Build a controller for `R`'s screen using the page size, search mode and
/// default sort from `config`
pub fn controller_for<R: ListRecord>(config: &Config) -> Result<ListViewController<R>, ConfigError> {
    let mut schema = R::schema();
    if let Some(sort) = config.default_sort_for(R::SCREEN)? {
        schema.set_default_sort(Some(sort));
    }

    let controller = ListViewController::new(schema, config.page_size_for(R::SCREEN))?
        .with_search_mode(config.list.search_mode);
    Ok(controller)
}

pub(crate) fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}
