pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::ports::SourceSettings;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vacation-calendar")]
#[command(about = "Public holiday calendar grouped into ISO weeks, served over HTTP")]
pub struct CliConfig {
    /// TOML configuration file; when given, it replaces the server and source flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = toml_config::DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = toml_config::DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = crate::adapters::DEFAULT_NAGER_ENDPOINT)]
    pub nager_endpoint: String,

    #[arg(long, default_value_t = toml_config::DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Do not fall back to the built-in country list")]
    pub no_builtin_fallback: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn sources(&self) -> Vec<SourceSettings> {
        let mut sources = toml_config::default_sources(&self.nager_endpoint, self.timeout_seconds);
        if self.no_builtin_fallback {
            sources.truncate(1);
        }
        sources
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_range("port", self.port, 1, u16::MAX)?;
        validation::validate_url("nager_endpoint", &self.nager_endpoint)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
