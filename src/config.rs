//! Runtime configuration read from the environment (and `.env`).

use crate::output::OutputFormat;
use clap::ValueEnum;
use std::env;

/// Environment variable naming the log4rs YAML file.
pub const ENV_LOG_CONFIG: &str = "IPCMP_LOG_CONFIG";
/// Environment variable naming the default batch output format.
pub const ENV_OUTPUT: &str = "IPCMP_OUTPUT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_OUTPUT: OutputFormat = OutputFormat::Csv;

/// Settings as read from the environment.
///
/// The output format is kept as written and only resolved by
/// [`Config::output_format`], once logging is up to report a bad value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs configuration file.
    pub log_config: String,
    /// Raw `IPCMP_OUTPUT` value, if set.
    pub output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: None,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        Config {
            log_config: lookup(ENV_LOG_CONFIG).unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string()),
            output: lookup(ENV_OUTPUT),
        }
    }

    /// Output format used by `batch` when none is given on the command line.
    ///
    /// Unknown names fall back to CSV.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        match &self.output {
            Some(name) => OutputFormat::from_str(name.trim(), true)
                .map_err(|e| format!("{ENV_OUTPUT}: {e}, using {DEFAULT_OUTPUT}")),
            None => Ok(DEFAULT_OUTPUT),
        }
    }

    /// [`Config::output_format`], logging the reason for any fallback.
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format().unwrap_or_else(|reason| {
            log::warn!("{reason}");
            DEFAULT_OUTPUT
        })
    }
}
