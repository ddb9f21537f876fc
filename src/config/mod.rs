//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{batches, output_formats, timeouts};
use crate::core::error::{Result, UpwatchError};
use crate::monitor::SweepOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-probe timeout in seconds
    pub timeout: Option<f64>,

    /// Number of probes in flight per chunk
    pub batch_size: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Use HEAD requests instead of GET for cheaper probes
    /// (some servers may not support them)
    pub use_head_requests: Option<bool>,

    /// Skip SSL certificate verification
    pub skip_ssl_verification: Option<bool>,

    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            batch_size: Some(batches::DEFAULT_BATCH_SIZE),
            user_agent: None,
            use_head_requests: Some(false), // Default to GET for compatibility
            skip_ssl_verification: Some(false),
            proxy: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UpwatchError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UpwatchError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .upwatch.toml in current directory
        if let Ok(config) = Self::load_from_file(".upwatch.toml") {
            return config;
        }

        // Check for .upwatch.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.upwatch.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(batch_size) = cli_config.batch_size {
            self.batch_size = Some(batch_size);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref proxy) = cli_config.proxy {
            self.proxy = Some(proxy.clone());
        }
        if cli_config.use_head_requests {
            self.use_head_requests = Some(true);
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get the per-probe timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs_f64(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Batch size with the default applied
    pub fn batch_size_or_default(&self) -> usize {
        self.batch_size.unwrap_or(batches::DEFAULT_BATCH_SIZE)
    }

    /// Sweep options derived from this configuration
    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions {
            batch_size: self.batch_size_or_default(),
            timeout: self.timeout_duration(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout <= 0.0 {
                return Err(UpwatchError::Config(
                    "Timeout must be positive. Expected a number of seconds, e.g. 5.0."
                        .to_string(),
                ));
            }
            if timeout > timeouts::REJECT_TIMEOUT_SECONDS {
                return Err(UpwatchError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>1 hour). Consider using a smaller value."
                )));
            }
        }

        if let Some(batch_size) = self.batch_size {
            if batch_size == 0 {
                return Err(UpwatchError::Config(
                    "Batch size cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if batch_size > batches::MAX_BATCH_SIZE {
                return Err(UpwatchError::Config(format!(
                    "Batch size of {batch_size} is extremely high and may overwhelm servers. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UpwatchError::Config(format!(
                "Output format '{}' is not supported. Expected one of: {}.",
                format,
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration fragment carried by CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub timeout: Option<f64>,
    pub batch_size: Option<usize>,
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
    pub use_head_requests: bool,
    pub skip_ssl_verification: bool,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub no_progress: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}
