//! Collection sources
//!
//! A `Source` opens one collection body by name. The pipeline does not
//! care whether the bytes come from HTTP or the local filesystem.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::collection::Collection;
use crate::errors::{transport_error, Result};

/// Supplies the raw body of each collection
pub trait Source: Send + Sync {
    /// Open a collection body for streaming
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the collection cannot be reached.
    fn open(&self, collection: Collection) -> Result<Box<dyn Read + Send>>;

    /// Human-readable location of a collection, for logs and errors
    fn locate(&self, collection: Collection) -> String;
}

/// HTTP timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(3),
            timeout: Duration::from_secs(180),
        }
    }
}

/// Fetches `{base_url}/{file_name}` with a blocking GET
///
/// Anything but `200 OK` is a transport failure. The overall timeout
/// covers reading the body, so a stalled stream fails the run.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// # Errors
    ///
    /// Returns `Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, config: &TransportConfig) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| transport_error(&base_url, e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Source for HttpSource {
    fn open(&self, collection: Collection) -> Result<Box<dyn Read + Send>> {
        let url = self.locate(collection);
        tracing::debug!(url = %url, "fetching collection");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(transport_error(
                &url,
                format!("unexpected HTTP status {}", status),
            ));
        }

        Ok(Box::new(response))
    }

    fn locate(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.file_name())
    }
}

/// Reads collections from files in a local directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Source for DirSource {
    fn open(&self, collection: Collection) -> Result<Box<dyn Read + Send>> {
        let path = self.root.join(collection.file_name());
        let file = File::open(&path).map_err(|e| transport_error(&path.display().to_string(), e))?;
        Ok(Box::new(file))
    }

    fn locate(&self, collection: Collection) -> String {
        self.root.join(collection.file_name()).display().to_string()
    }
}

/// Pick a source for a location string
///
/// `http://` and `https://` locations are fetched over HTTP; anything else
/// is treated as a local directory.
///
/// # Errors
///
/// Returns `Transport` if the HTTP client cannot be built.
pub fn source_for(location: &str, config: &TransportConfig) -> Result<Box<dyn Source>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, config)?))
    } else {
        Ok(Box::new(DirSource::new(location)))
    }
}
