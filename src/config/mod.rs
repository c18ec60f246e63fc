pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_one_of, validate_positive_number, validate_provider_url, validate_socket_addr, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PROVIDER_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "shipit-gateway")]
#[command(about = "Validates shipment requests and forwards them to the ShipIt API")]
pub struct CliConfig {
    #[arg(long, env = "SHIPIT_CONFIG", help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "BIND_ADDR")]
    pub bind_addr: Option<String>,

    #[arg(long, env = "SHIPIT_BASE_URL")]
    pub provider_url: Option<String>,

    #[arg(long, env = "SHIPIT_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, env = "LOG_FORMAT", help = "compact or json")]
    pub log_format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併後的設定：CLI/env > TOML > 預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub provider_base_url: String,
    pub timeout_seconds: u64,
    pub log_format: String,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            provider_base_url: DEFAULT_PROVIDER_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_format: LOG_FORMATS[0].to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    pub fn merge(cli: &CliConfig, file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: cli
                .bind_addr
                .clone()
                .or_else(|| file.server.bind_addr.clone())
                .unwrap_or(defaults.bind_addr),
            provider_base_url: cli
                .provider_url
                .clone()
                .or_else(|| file.provider.base_url.clone())
                .unwrap_or(defaults.provider_base_url),
            timeout_seconds: cli
                .timeout_seconds
                .or(file.provider.timeout_seconds)
                .unwrap_or(defaults.timeout_seconds),
            log_format: cli
                .log_format
                .clone()
                .or_else(|| file.logging.format.clone())
                .unwrap_or(defaults.log_format),
            verbose: cli.verbose,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl ConfigProvider for Settings {
    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn provider_base_url(&self) -> &str {
        &self.provider_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind_addr", &self.bind_addr)?;
        validate_provider_url("provider.base_url", &self.provider_base_url)?;
        validate_positive_number("provider.timeout_seconds", self.timeout_seconds, 1)?;
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}
