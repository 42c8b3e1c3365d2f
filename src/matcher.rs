use crate::error::SyslogFilterError;
use crate::window::TimeWindow;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Pattern used when none is given: timestamp, user and an ERROR/error message
pub const DEFAULT_PATTERN: &str = r"(.*:..:..) (\S*) (.*(ERROR|error).*)";

/// A log line that matched the pattern (and the time window, if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub actor: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: impl Into<String>,
        actor: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            actor: actor.into(),
            message: message.into(),
        }
    }
}

/// Extracts (timestamp, actor, message) from the first three capture groups
/// of a user-supplied regular expression
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile `pattern`. Patterns with fewer than three capture groups are
    /// rejected up front; extra (nested) groups are allowed and ignored.
    pub fn new(pattern: &str) -> Result<Self, SyslogFilterError> {
        let regex = Regex::new(pattern).map_err(|source| SyslogFilterError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found < 3 {
            return Err(SyslogFilterError::PatternGroups {
                pattern: pattern.to_string(),
                found,
            });
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Search a single line. The match may start anywhere in the line.
    pub fn match_line(&self, line: &str) -> Option<LogRecord> {
        let caps = self.regex.captures(line)?;
        let timestamp = caps.get(1)?;
        let actor = caps.get(2)?;
        let message = caps.get(3)?;

        Some(LogRecord::new(
            timestamp.as_str(),
            actor.as_str(),
            message.as_str(),
        ))
    }

    /// Collect every matching line from `reader` in input order, keeping only
    /// records inside `window` when one is given
    pub fn collect<R: BufRead>(
        &self,
        mut reader: R,
        window: Option<&TimeWindow>,
    ) -> std::io::Result<Vec<LogRecord>> {
        let mut records = Vec::new();
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(record) = self.match_line(line) else {
                continue;
            };

            if let Some(window) = window {
                if !window.contains(&record.timestamp) {
                    trace!(
                        line_number,
                        timestamp = %record.timestamp,
                        "Outside time window"
                    );
                    continue;
                }
            }

            records.push(record);
        }

        debug!(lines = line_number, kept = records.len(), "Scanned log input");
        Ok(records)
    }
}

/// Open `path` and collect matching records from it.
///
/// The file is closed before this returns, on success or error.
pub fn scan_log_file(
    path: &Path,
    matcher: &Matcher,
    window: Option<&TimeWindow>,
) -> Result<Vec<LogRecord>, SyslogFilterError> {
    let access_error = |source| SyslogFilterError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(access_error)?;
    debug!(path = %path.display(), "Opened log file");

    matcher
        .collect(BufReader::new(file), window)
        .map_err(access_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SYSLOG: &str = "\
Jun  4 07:25:59 host1 kernel: disk ERROR on sda
Jun  4 07:26:00 host1 systemd[1]: Started session.
Jun  4 08:10:11 host2 app: connection error, retrying
Jun  5 09:00:00 host1 cron: ERROR job failed
";

    #[test]
    fn test_default_pattern_extracts_three_groups() {
        let matcher = Matcher::new(DEFAULT_PATTERN).unwrap();
        let record = matcher
            .match_line("Jun  4 07:25:59 host1 kernel: disk ERROR on sda")
            .unwrap();

        assert_eq!(record.timestamp, "Jun  4 07:25:59");
        assert_eq!(record.actor, "host1");
        assert_eq!(record.message, "kernel: disk ERROR on sda");
    }

    #[test]
    fn test_non_matching_line_is_skipped() {
        let matcher = Matcher::new(DEFAULT_PATTERN).unwrap();
        assert!(
            matcher
                .match_line("Jun  4 07:26:00 host1 systemd[1]: Started session.")
                .is_none()
        );
    }

    #[test]
    fn test_match_is_unanchored() {
        let matcher = Matcher::new(r"(\d+) (\w+) (boom)").unwrap();
        let record = matcher.match_line("prefix 42 svc boom suffix").unwrap();
        assert_eq!(record.timestamp, "42");
        assert_eq!(record.actor, "svc");
        assert_eq!(record.message, "boom");
    }

    #[test]
    fn test_non_participating_group_is_no_match() {
        let matcher = Matcher::new(r"(a)|(b)(c)").unwrap();
        assert!(matcher.match_line("a").is_none());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Matcher::new(r"(unclosed").unwrap_err();
        assert!(matches!(err, SyslogFilterError::Pattern { .. }));
    }

    #[test]
    fn test_pattern_with_too_few_groups_is_rejected() {
        let err = Matcher::new(r"(.*) (.*)").unwrap_err();
        assert!(matches!(
            err,
            SyslogFilterError::PatternGroups { found: 2, .. }
        ));
    }

    #[test]
    fn test_collect_preserves_input_order() {
        let matcher = Matcher::new(DEFAULT_PATTERN).unwrap();
        let records = matcher.collect(Cursor::new(SYSLOG), None).unwrap();

        let actors: Vec<&str> = records.iter().map(|r| r.actor.as_str()).collect();
        assert_eq!(actors, vec!["host1", "host2", "host1"]);
        assert_eq!(records[1].message, "app: connection error, retrying");
    }

    #[test]
    fn test_collect_applies_time_window() {
        let matcher = Matcher::new(DEFAULT_PATTERN).unwrap();
        let window: TimeWindow = "Jun.4.07:00:00-Jun.4.08:00:00".parse().unwrap();
        let records = matcher.collect(Cursor::new(SYSLOG), Some(&window)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, "Jun  4 07:25:59");
    }

    #[test]
    fn test_collect_tolerates_invalid_utf8_and_crlf() {
        let matcher = Matcher::new(DEFAULT_PATTERN).unwrap();
        let input: &[u8] = b"Jun  4 07:25:59 host1 k: \xff ERROR\r\nnoise\n";
        let records = matcher.collect(Cursor::new(input), None).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].message.ends_with("ERROR"));
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let matcher = Matcher::new(DEFAULT_PATTERN).unwrap();
        let err = scan_log_file(Path::new("/nonexistent/syslog"), &matcher, None).unwrap_err();
        assert!(matches!(err, SyslogFilterError::FileAccess { .. }));
    }
}
