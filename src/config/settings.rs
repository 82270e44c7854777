use crate::config::toml_config::{HttpConfig, TomlConfig};
use crate::core::ConfigProvider;
use crate::domain::catalog::{builtin_endpoints, DEFAULT_DATA_DIR};
use crate::domain::model::Endpoint;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{
    normalize_path, validate_non_empty_string, validate_path, validate_positive_number,
    validate_unique, validate_url, Validate,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fully resolved run configuration: built-in defaults, then the file, then CLI overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub endpoints: Vec<Endpoint>,
    pub http: HttpConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            endpoints: builtin_endpoints(),
            http: HttpConfig::default(),
        }
    }
}

impl From<TomlConfig> for Settings {
    fn from(config: TomlConfig) -> Self {
        let defaults = Settings::default();
        Self {
            data_dir: config.data_dir.unwrap_or(defaults.data_dir),
            endpoints: config.endpoints.unwrap_or(defaults.endpoints),
            http: config.http,
        }
    }
}

impl Settings {
    /// Keeps only the named endpoints, in configured order. An empty list keeps everything.
    pub fn select(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }

        if let Some(unknown) = names
            .iter()
            .find(|name| !self.endpoints.iter().any(|e| &e.name == *name))
        {
            return Err(FetchError::UnknownEndpointError {
                name: unknown.clone(),
            });
        }

        self.endpoints.retain(|e| names.contains(&e.name));
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir.to_string_lossy())?;

        if self.endpoints.is_empty() {
            return Err(FetchError::ConfigError {
                message: "no endpoints configured".to_string(),
            });
        }

        for endpoint in &self.endpoints {
            validate_non_empty_string("endpoints.name", &endpoint.name)?;
            validate_url(&format!("endpoints.{}.url", endpoint.name), &endpoint.url)?;
            validate_path(
                &format!("endpoints.{}.destination", endpoint.name),
                &endpoint.destination.to_string_lossy(),
            )?;
        }

        validate_unique("endpoints.name", self.endpoints.iter().map(|e| e.name.as_str()))?;
        // Compare where files actually land, so `x.csv` and `./x.csv` collide.
        let destinations = self
            .endpoints
            .iter()
            .map(|e| {
                normalize_path("endpoints.destination", &self.data_dir.join(&e.destination))
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .collect::<Result<Vec<String>>>()?;
        validate_unique("endpoints.destination", destinations.iter().map(String::as_str))?;

        if let Some(timeout) = self.http.timeout_seconds {
            validate_positive_number("http.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
