use crate::export::ExportedFiles;
use crate::intersection::IntersectionSummary;
use crate::matcher::LogRecord;
use colored::Colorize;
use std::fmt::Write as _;

/// One line per kept record: `<timestamp> <actor> <message>`
pub fn format_records(records: &[LogRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{} {} {}",
            record.timestamp, record.actor, record.message
        );
    }
    out
}

/// Count and intersection lines printed after the records
pub fn format_summary(records: &[LogRecord], summary: &IntersectionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Found {} logs.", records.len());

    if summary.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            "Found no intersection in the filtered logs.".yellow()
        );
    } else {
        let _ = writeln!(
            out,
            "The filtered logs intersect at: {}",
            summary.to_string().as_str().green()
        );
    }
    out
}

pub fn format_export(files: &ExportedFiles) -> String {
    format!(
        "Exported {} logs to {} and {}.\n",
        files.rows,
        files.csv.display(),
        files.html.display()
    )
}
