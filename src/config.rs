//! Configuration management and validation.
//!
//! Provides the per-request report options and the HTTP server configuration,
//! loaded in layers: defaults, optional TOML file, environment, CLI flags.

use crate::constants::{
    APP_DIR_NAME, BYTES_PER_MB, CONFIG_FILE_NAME, DEFAULT_ALLOWED_CONTENT_TYPES,
    DEFAULT_BIND_ADDRESS, DEFAULT_MAX_UPLOAD_MB, DEFAULT_PORT, ENV_BIND_ADDRESS, ENV_PORT,
    OPTION_TRUE_VALUE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Report options chosen by the caller of an evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QcOptions {
    /// Record rejected sensor headers in the report
    pub display_errors: bool,
    /// Append the elapsed processing time to the report
    pub display_time: bool,
}

impl QcOptions {
    pub fn new(display_errors: bool, display_time: bool) -> Self {
        Self {
            display_errors,
            display_time,
        }
    }

    /// Parse options from raw form values
    pub fn from_raw(display_errors: Option<&str>, display_time: Option<&str>) -> Self {
        Self {
            display_errors: Self::parse_flag(display_errors),
            display_time: Self::parse_flag(display_time),
        }
    }

    /// Only a case-insensitive "true" enables an option; anything else, or nothing, is false
    pub fn parse_flag(value: Option<&str>) -> bool {
        value.is_some_and(|v| v.trim().eq_ignore_ascii_case(OPTION_TRUE_VALUE))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address to bind the listener to
    pub bind_address: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum accepted request body in MB
    pub max_upload_mb: usize,

    /// Content types accepted for uploaded log files
    pub allowed_content_types: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            allowed_content_types: DEFAULT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Default config file location, e.g. `~/.config/sensor-qc/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Unable to determine user config directory"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file '{}'", path.display()), e)
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration using layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(
            std::env::var(ENV_BIND_ADDRESS).ok(),
            std::env::var(ENV_PORT).ok(),
        )?;

        Ok(config)
    }

    /// Apply environment overrides, given as raw variable values
    pub fn apply_env_overrides(
        &mut self,
        bind_address: Option<String>,
        port: Option<String>,
    ) -> Result<()> {
        if let Some(bind_address) = bind_address {
            debug!("{} overrides bind address: {}", ENV_BIND_ADDRESS, bind_address);
            self.bind_address = bind_address;
        }

        if let Some(port) = port {
            self.port = port.trim().parse::<u16>().map_err(|e| {
                Error::configuration(format!("Invalid {} value '{}': {}", ENV_PORT, port, e))
            })?;
            debug!("{} overrides port: {}", ENV_PORT, self.port);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(Error::configuration("Bind address must not be empty"));
        }

        if self.port == 0 {
            return Err(Error::configuration("Port must be greater than 0"));
        }

        if self.max_upload_mb == 0 {
            return Err(Error::configuration(
                "Maximum upload size must be greater than 0 MB",
            ));
        }

        if self.max_upload_mb.checked_mul(BYTES_PER_MB).is_none() {
            return Err(Error::configuration(format!(
                "Maximum upload size of {} MB is too large",
                self.max_upload_mb
            )));
        }

        if self.allowed_content_types.is_empty() {
            return Err(Error::configuration(
                "At least one allowed content type is required",
            ));
        }

        Ok(())
    }

    /// Maximum request body size in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }

    /// Socket address string for the listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Check whether an upload content type is accepted
    pub fn is_content_type_allowed(&self, content_type: &str) -> bool {
        // Ignore parameters such as "; charset=utf-8"
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(essence))
    }
}
