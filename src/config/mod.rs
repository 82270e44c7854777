pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use settings::Settings;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "covid-fetch")]
#[command(about = "Download public COVID-19 datasets to local files")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Output directory [default: data]")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Fetch only the named endpoints")]
    pub only: Vec<String>,

    #[arg(long, help = "Request timeout in seconds [default: none]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Fail on non-2xx responses instead of saving the body")]
    pub strict_status: bool,

    #[arg(long, help = "List configured endpoints and exit")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Built-in defaults, then `--config`, then flags. The result is validated.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from(TomlConfig::from_file(path)?),
            None => Settings::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.http.timeout_seconds = Some(timeout);
        }
        if self.strict_status {
            settings.http.strict_status = true;
        }

        settings.select(&self.only)?;
        settings.validate()?;
        Ok(settings)
    }
}
