//! Command-line configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs. A `.env` file in the working directory is honoured (loaded by
//! `main.rs` via `dotenvy`).
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `NO_COLOR` - Any non-empty value disables coloured output

use anyhow::{Context, Result};
use std::env;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// When false, terminal output is written without ANSI colours.
    pub color: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid unicode.
    pub fn from_env() -> Result<Self> {
        let log_level = optional_var("RUST_LOG")
            .context("Failed to read RUST_LOG")?
            .unwrap_or_else(|| "warn".to_string());
        let log_format = optional_var("LOG_FORMAT")
            .context("Failed to read LOG_FORMAT")?
            .unwrap_or_else(|| "text".to_string());

        let color = env::var_os("NO_COLOR").is_none_or(|v| v.is_empty());

        Ok(Self {
            log_level,
            log_format,
            color,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `log_level` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("RUST_LOG must not be empty");
        }

        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
        tracing::debug!("  Colour: {}", if self.color { "on" } else { "off" });
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            color: true,
        }
    }
}

/// Reads `key`, treating an unset variable as `None`.
fn optional_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is unreadable or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
