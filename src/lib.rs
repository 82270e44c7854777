pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, settings::Settings, toml_config::TomlConfig};
pub use core::{engine::FetchEngine, http_fetcher::HttpFetcher};
pub use domain::catalog::builtin_endpoints;
pub use domain::model::{Endpoint, FetchOutcome};
pub use utils::error::{FetchError, Result};
