use crate::config::ConfigError;
use crate::export::ExportError;
use crate::window::TimeWindowError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a filtering run
#[derive(Debug, Error)]
pub enum SyslogFilterError {
    #[error("Failed to open log file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regular expression '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(
        "Regular expression '{pattern}' needs 3 capture groups (timestamp, user, message), found {found}"
    )]
    PatternGroups { pattern: String, found: usize },

    #[error("Invalid time window: {0}")]
    TimeWindow(#[from] TimeWindowError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl SyslogFilterError {
    /// Process exit code for this error.
    ///
    /// Export failures happen after the filtering report was printed, so they
    /// get their own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyslogFilterError::Export(_) => 2,
            _ => 1,
        }
    }
}
