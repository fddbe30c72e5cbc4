//! Data sources that produce a list screen's collection
//!
//! A source only knows how to fetch the current collection as a whole. It
//! does not filter, sort or page; that stays in the list view controller.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::config::SourceConfig;
use crate::error::FetchError;

/// Fetches the full current collection for one screen
pub trait DataSource<T>: Send + Sync + Debug {
    fn fetch(&self) -> Result<Vec<T>, FetchError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Fixed in-memory records, e.g. fixtures or demo data handed in at construction
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    items: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> DataSource<T> for StaticSource<T>
where
    T: Clone + Send + Sync + Debug,
{
    fn fetch(&self) -> Result<Vec<T>, FetchError> {
        Ok(self.items.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.items.len())
    }
}

/// Reads a JSON array (or `{ "data": [...] }` envelope) from disk on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileSource<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileSource<T> {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: DeserializeOwned + Debug> DataSource<T> for JsonFileSource<T> {
    fn fetch(&self) -> Result<Vec<T>, FetchError> {
        let body = std::fs::read_to_string(&self.path)?;
        let items = parse_collection(&body)?;
        tracing::debug!(target: "fetch", "loaded {} records from {:?}", items.len(), self.path);
        Ok(items)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// GETs a collection from a REST endpoint using a blocking client
#[derive(Debug, Clone)]
pub struct RestSource<T> {
    url: String,
    auth_token: Option<String>,
    client: reqwest::blocking::Client,
    _record: PhantomData<fn() -> T>,
}

impl<T> RestSource<T> {
    /// `endpoint` is joined onto `config.base_url`
    pub fn from_config(config: &SourceConfig, endpoint: &str) -> Result<Self, FetchError> {
        Self::from_url(config, &join_url(&config.base_url, endpoint))
    }

    /// Fetch from `url` exactly as given, using `config` only for the token
    /// and timeout
    pub fn from_url(config: &SourceConfig, url: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            url: url.to_string(),
            auth_token: config.auth_token.clone(),
            client,
            _record: PhantomData,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<T: DeserializeOwned + Debug> DataSource<T> for RestSource<T> {
    fn fetch(&self) -> Result<Vec<T>, FetchError> {
        let mut request = self.client.get(&self.url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(target: "fetch", "GET {}", self.url);
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        parse_collection(&body)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Bare(Vec<T>),
    Envelope { data: Vec<T> },
}

/// Decode either a bare JSON array or an object carrying the array in `data`
pub fn parse_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    match serde_json::from_str::<Payload<T>>(body) {
        Ok(Payload::Bare(items)) | Ok(Payload::Envelope { data: items }) => Ok(items),
        // Re-decode as a bare array so the error names the failing record
        Err(_) => Ok(serde_json::from_str::<Vec<T>>(body)?),
    }
}

pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
