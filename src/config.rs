use crate::cli::Cli;
use crate::matcher::DEFAULT_PATTERN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Log file read when none is given
pub const DEFAULT_LOG_FILE: &str = "/var/log/syslog";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults loaded from a TOML file passed with `--config`
///
/// ```toml
/// log_file = "/var/log/syslog"
/// regexp = '(.*:..:..) (\S*) (.*(ERROR|error).*)'
/// output_file = "reports/errors"
/// time_window = "Jun.4.07:25:59-Jun.4.15:18:00"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub log_file: Option<PathBuf>,
    pub regexp: Option<String>,
    pub output_file: Option<PathBuf>,
    pub time_window: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(FilterConfig::default())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FilterConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<FilterConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

/// Resolved parameters of one filtering run
///
/// Command line (or environment) values win over the config file, which
/// wins over the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_file: PathBuf,
    pub regexp: String,
    pub output_file: Option<PathBuf>,
    pub time_window: Option<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: FilterConfig) -> Self {
        Self {
            log_file: cli
                .log_file
                .clone()
                .or(config.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            regexp: cli
                .regexp
                .clone()
                .or(config.regexp)
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            output_file: cli.output_file.clone().or(config.output_file),
            time_window: cli.time_window.clone().or(config.time_window),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            regexp: DEFAULT_PATTERN.to_string(),
            output_file: None,
            time_window: None,
        }
    }
}
