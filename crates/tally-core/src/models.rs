use std::collections::HashMap;

/// Marker that opens every header line of an exported chat.
pub const HEADER_MARKER: char = '[';

/// How a single line of the chat export relates to the message stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts a new message: `[DD/MM/YYYY HH:MM:SS] Author: text`.
    Header,
    /// Wrapped body text belonging to the previous header.
    Continuation,
}

impl LineKind {
    /// Classify `line` by its first character only.
    pub fn classify(line: &str) -> Self {
        if line.starts_with(HEADER_MARKER) {
            LineKind::Header
        } else {
            LineKind::Continuation
        }
    }
}

/// Month key and author pulled out of a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    /// Literal positional slice of the header, e.g. `"02/20"`.
    pub month_key: String,
    /// Display name between `] ` and `: `.
    pub author: String,
}

// ── MonthBucket ───────────────────────────────────────────────────────────────

/// Per-author counts for one month key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthBucket {
    month_key: String,
    authors: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl MonthBucket {
    fn new(month_key: impl Into<String>) -> Self {
        Self {
            month_key: month_key.into(),
            ..Self::default()
        }
    }

    pub fn month_key(&self) -> &str {
        &self.month_key
    }

    /// Authors and their counts in the order each author was first counted.
    pub fn authors(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.authors.iter().map(|(name, n)| (name.as_str(), *n))
    }

    pub fn get(&self, author: &str) -> Option<u64> {
        self.index.get(author).map(|&i| self.authors[i].1)
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Sum of all author counts in this month.
    pub fn total(&self) -> u64 {
        self.authors.iter().map(|(_, n)| n).sum()
    }

    fn increment(&mut self, author: &str) {
        match self.index.get(author) {
            Some(&i) => self.authors[i].1 += 1,
            None => {
                self.index.insert(author.to_string(), self.authors.len());
                self.authors.push((author.to_string(), 1));
            }
        }
    }
}

// ── MonthlyTally ──────────────────────────────────────────────────────────────

/// Two-level table `month key → author → count`.
///
/// Both levels keep insertion order, so the report lists months and
/// tied authors in the order they first appeared in the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyTally {
    months: Vec<MonthBucket>,
    index: HashMap<String, usize>,
}

impl MonthlyTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `(month_key, author)`, creating either level on first use.
    pub fn increment(&mut self, month_key: &str, author: &str) {
        let slot = match self.index.get(month_key) {
            Some(&i) => i,
            None => {
                let i = self.months.len();
                self.index.insert(month_key.to_string(), i);
                self.months.push(MonthBucket::new(month_key));
                i
            }
        };
        self.months[slot].increment(author);
    }

    /// Count for `(month_key, author)`, or `None` if never incremented.
    pub fn get(&self, month_key: &str, author: &str) -> Option<u64> {
        self.month(month_key).and_then(|m| m.get(author))
    }

    pub fn month(&self, month_key: &str) -> Option<&MonthBucket> {
        self.index.get(month_key).map(|&i| &self.months[i])
    }

    /// Months in first-seen order.
    pub fn months(&self) -> impl Iterator<Item = &MonthBucket> + '_ {
        self.months.iter()
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Sum of every count in the table.
    pub fn total(&self) -> u64 {
        self.months.iter().map(MonthBucket::total).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
