//! Export of kept records as a delimited table and an HTML rendering of it
//!
//! Given a base path `out/errors`, two files are written side by side:
//!
//! ```text
//! out/errors.csv     "Timestamp, User, Log Message" header + one row per record
//! out/errors.html    the same table rendered as HTML
//! ```
//!
//! The HTML file is produced by reading the CSV file back, so both always
//! agree on row count and cell text.

pub mod html;
pub mod table;

use crate::matcher::LogRecord;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub use html::render_html;
pub use table::{HEADER, write_table};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process table '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Paths written by [`export_records`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub csv: PathBuf,
    pub html: PathBuf,
    pub rows: usize,
}

/// Append an extension to a base path without replacing an existing one
fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// Write `<base>.csv` and `<base>.html` for `records`.
///
/// Missing parent directories of `base` are created first. An empty record
/// list still produces a header-only table and an empty HTML table.
pub fn export_records(base: &Path, records: &[LogRecord]) -> Result<ExportedFiles, ExportError> {
    if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let csv_path = with_suffix(base, "csv");
    let html_path = with_suffix(base, "html");

    let file = File::create(&csv_path).map_err(|source| ExportError::Io {
        path: csv_path.clone(),
        source,
    })?;
    let rows = write_table(records, BufWriter::new(file), &csv_path)?;
    debug!(path = %csv_path.display(), rows, "Wrote table");

    let file = File::open(&csv_path).map_err(|source| ExportError::Io {
        path: csv_path.clone(),
        source,
    })?;
    let html = render_html(file, &csv_path)?;
    fs::write(&html_path, html).map_err(|source| ExportError::Io {
        path: html_path.clone(),
        source,
    })?;

    info!(
        csv = %csv_path.display(),
        html = %html_path.display(),
        rows,
        "Export finished"
    );

    Ok(ExportedFiles {
        csv: csv_path,
        html: html_path,
        rows,
    })
}
