use super::ExportError;
use crate::matcher::LogRecord;
use std::io::Write;
use std::path::Path;

/// Header record of the exported table; written as `Timestamp, User, Log Message`
pub const HEADER: [&str; 3] = ["Timestamp", " User", " Log Message"];

/// Write `records` as a comma-delimited table and return the row count.
///
/// Commas are removed from the message (not escaped) so the message column
/// never spills into extra columns. `path` is only used for error context.
pub fn write_table<W: Write>(
    records: &[LogRecord],
    writer: W,
    path: &Path,
) -> Result<usize, ExportError> {
    let csv_error = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER).map_err(csv_error)?;

    for record in records {
        let message = record.message.replace(',', "");
        csv_writer
            .write_record([
                record.timestamp.as_str(),
                record.actor.as_str(),
                message.as_str(),
            ])
            .map_err(csv_error)?;
    }

    csv_writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(records.len())
}
