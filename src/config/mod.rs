//! Configuration module
//!
//! Settings for page sizes, search behaviour, the REST data source and
//! logging, loaded from a TOML file.

pub mod config;

pub use config::Config;
