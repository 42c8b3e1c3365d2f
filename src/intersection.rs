use crate::matcher::LogRecord;
use std::collections::HashSet;
use std::fmt;

/// Marker for a token that is not shared by every message
pub const PLACEHOLDER: &str = "*";

/// Positional template of the words shared by every kept message
///
/// Built against the first record's message: each of its words is kept if
/// it occurs in every message and replaced with [`PLACEHOLDER`] otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntersectionSummary {
    tokens: Vec<String>,
}

impl IntersectionSummary {
    /// Compute the summary over `records`.
    ///
    /// Messages are compared as word sets, so repeats and order inside a
    /// message don't matter. The result is empty when there are no records
    /// or no word is common to all of them.
    pub fn from_records(records: &[LogRecord]) -> Self {
        let Some((first, rest)) = records.split_first() else {
            return Self::default();
        };

        let mut common: HashSet<&str> = first.message.split_whitespace().collect();
        for record in rest {
            let words: HashSet<&str> = record.message.split_whitespace().collect();
            common.retain(|word| words.contains(word));
        }

        if common.is_empty() {
            return Self::default();
        }

        let tokens = first
            .message
            .split_whitespace()
            .map(|word| {
                if common.contains(word) {
                    word.to_string()
                } else {
                    PLACEHOLDER.to_string()
                }
            })
            .collect();

        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Tokens joined by single spaces, each followed by a separator
impl fmt::Display for IntersectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token} ")?;
        }
        Ok(())
    }
}
