use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

/// A fixed (URL, destination) pair. The destination is relative to the data directory
/// unless it is absolute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
    pub destination: PathBuf,
    #[serde(default)]
    pub description: Option<String>,
}

impl Endpoint {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            destination: destination.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Raw response body plus the bits of the response worth logging.
#[derive(Debug, Clone)]
pub struct Payload {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Payload {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub endpoint: String,
    pub path: PathBuf,
    pub status: u16,
    pub bytes_written: usize,
    pub fetched_at: DateTime<Utc>,
}
