pub mod service;

pub use service::ServiceConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "geo-lookup")]
#[command(about = "Look up coordinates for a city and state")]
pub struct CliConfig {
    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub state: String,

    #[arg(long, help = "TOML configuration file (defaults to environment variables)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the geocoding endpoint")]
    pub geocode_endpoint: Option<String>,

    #[arg(long, help = "Override the latency endpoint")]
    pub latency_url: Option<String>,

    #[arg(long, help = "Skip the latency call")]
    pub no_latency: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入基礎配置後套用命令列覆寫
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::from_env()?,
        };

        if let Some(endpoint) = &self.geocode_endpoint {
            config.geocode.endpoint = endpoint.clone();
        }
        if let Some(url) = &self.latency_url {
            config.latency.url = url.clone();
        }
        if self.no_latency {
            config.latency.enabled = false;
        }

        Ok(config)
    }
}
