//! Per-month, per-author counting of target matches in a chat export.

use std::io::BufRead;
use std::path::Path;

use tally_core::error::{Result, TallyError};
use tally_core::models::{LineKind, MonthlyTally};
use tracing::{debug, info};

use crate::parser::HeaderParser;
use crate::reader::{chat_lines, open_chat_log};

// ── ScanStats ─────────────────────────────────────────────────────────────────

/// Line counters gathered during one pass over a chat log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: u64,
    /// Lines containing the target.
    pub lines_matched: u64,
    pub headers_parsed: u64,
    /// Matching lines attributed to the previous header.
    pub continuations: u64,
}

// ── LogAggregator ─────────────────────────────────────────────────────────────

/// Counts lines containing a target string, keyed by month and author.
///
/// Header lines (`[DD/MM/YYYY HH:MM:SS] Author: …`) that contain the target
/// set the current month and author and count once. Matching continuation
/// lines count once against whatever header came last. Lines without the
/// target are ignored entirely, headers included.
pub struct LogAggregator {
    headers: HeaderParser,
}

impl LogAggregator {
    pub fn new() -> Self {
        Self {
            headers: HeaderParser::new(),
        }
    }

    /// Tally `target` over the chat log at `path`.
    pub fn aggregate(&self, target: &str, path: &Path) -> Result<MonthlyTally> {
        self.aggregate_with_stats(target, path)
            .map(|(tally, _)| tally)
    }

    /// Like [`LogAggregator::aggregate`], also returning the scan counters.
    pub fn aggregate_with_stats(
        &self,
        target: &str,
        path: &Path,
    ) -> Result<(MonthlyTally, ScanStats)> {
        info!("Counting {:?} in {}", target, path.display());
        let reader = open_chat_log(path)?;
        let (tally, stats) = self.scan(target, chat_lines(reader, path))?;

        debug!(
            "File {}: {} read, {} matched, {} headers, {} continuations",
            path.display(),
            stats.lines_read,
            stats.lines_matched,
            stats.headers_parsed,
            stats.continuations,
        );

        Ok((tally, stats))
    }

    /// Tally `target` over any buffered reader.
    pub fn aggregate_reader(&self, target: &str, reader: impl BufRead) -> Result<MonthlyTally> {
        let lines = reader.lines().map(|line| line.map_err(TallyError::from));
        self.scan(target, lines).map(|(tally, _)| tally)
    }

    /// Single pass over `lines`, carrying the last header's month and author.
    ///
    /// Stops at the first read error or unparseable matching header; nothing
    /// counted so far is returned in that case.
    fn scan(
        &self,
        target: &str,
        lines: impl IntoIterator<Item = Result<String>>,
    ) -> Result<(MonthlyTally, ScanStats)> {
        let mut tally = MonthlyTally::new();
        let mut stats = ScanStats::default();
        let mut current_month = String::new();
        let mut current_author = String::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line?;
            stats.lines_read += 1;

            if !line.contains(target) {
                continue;
            }
            stats.lines_matched += 1;

            match LineKind::classify(&line) {
                LineKind::Header => {
                    let header = self.headers.parse(&line, idx + 1)?;
                    current_month = header.month_key;
                    current_author = header.author;
                    stats.headers_parsed += 1;
                }
                LineKind::Continuation => {
                    stats.continuations += 1;
                }
            }

            tally.increment(&current_month, &current_author);
        }

        Ok((tally, stats))
    }
}

impl Default for LogAggregator {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
