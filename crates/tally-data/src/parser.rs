//! Header-line parsing for `[DD/MM/YYYY HH:MM:SS] Author: message` exports.

use regex::Regex;
use tally_core::error::{Result, TallyError};
use tally_core::models::MessageHeader;

/// Character offset where the month key starts (`[DD/` is skipped).
const MONTH_KEY_OFFSET: usize = 4;
/// Width of the month key in characters: `MM/YY`.
const MONTH_KEY_WIDTH: usize = 5;

/// Literal 5-character slice of `line` starting at character offset 4.
///
/// For the standard header layout this is the month, a slash and the first
/// two digits of the year, e.g. `"02/20"` for `[01/02/2023 ...`. Shorter lines
/// yield whatever characters are available. No date validation happens here.
pub fn month_key(line: &str) -> String {
    line.chars()
        .skip(MONTH_KEY_OFFSET)
        .take(MONTH_KEY_WIDTH)
        .collect()
}

/// Extracts the month key and author from header lines.
pub struct HeaderParser {
    /// Shortest text between the first `] ` and the next `: `.
    author_re: Regex,
}

impl HeaderParser {
    pub fn new() -> Self {
        Self {
            author_re: Regex::new(r"\] (.*?): ").expect("regex is valid"),
        }
    }

    /// Author of a header line, or `None` when there is no `] … : ` segment.
    pub fn author<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.author_re
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    /// Parse `line` (1-based `line_number`, used for error reporting).
    pub fn parse(&self, line: &str, line_number: usize) -> Result<MessageHeader> {
        let author = self
            .author(line)
            .ok_or_else(|| TallyError::HeaderParse {
                line_number,
                line: line.to_string(),
            })?;

        Ok(MessageHeader {
            month_key: month_key(line),
            author: author.to_string(),
        })
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
