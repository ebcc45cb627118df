use std::io::Write;

use crate::models::{MonthBucket, MonthlyTally};

/// Authors of one month ranked by count, highest first.
///
/// The sort is stable, so authors with equal counts keep the order in which
/// they were first counted.
///
/// # Examples
///
/// ```
/// use tally_core::formatting::ranked_authors;
/// use tally_core::MonthlyTally;
///
/// let mut tally = MonthlyTally::new();
/// tally.increment("01/20", "Alice");
/// tally.increment("01/20", "Bob");
/// tally.increment("01/20", "Bob");
///
/// let ranked = ranked_authors(tally.month("01/20").unwrap());
/// assert_eq!(ranked, vec![("Bob", 2), ("Alice", 1)]);
/// ```
pub fn ranked_authors(bucket: &MonthBucket) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = bucket.authors().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Render the tally as report lines.
///
/// Each month contributes its key, one `"{author}: {count}"` line per author
/// (see [`ranked_authors`]) and a trailing empty line. An empty tally renders
/// to no lines at all.
///
/// # Examples
///
/// ```
/// use tally_core::formatting::format_report;
/// use tally_core::MonthlyTally;
///
/// let mut tally = MonthlyTally::new();
/// tally.increment("01/20", "Alice");
///
/// assert_eq!(format_report(&tally), vec!["01/20", "Alice: 1", ""]);
/// assert!(format_report(&MonthlyTally::new()).is_empty());
/// ```
pub fn format_report(tally: &MonthlyTally) -> Vec<String> {
    let mut lines = Vec::new();
    for bucket in tally.months() {
        lines.push(bucket.month_key().to_string());
        lines.extend(
            ranked_authors(bucket)
                .into_iter()
                .map(|(author, count)| format!("{}: {}", author, count)),
        );
        lines.push(String::new());
    }
    lines
}

/// Write [`format_report`] output to `out`, one newline-terminated line each.
pub fn write_report(tally: &MonthlyTally, mut out: impl Write) -> std::io::Result<()> {
    for line in format_report(tally) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_from(entries: &[(&str, &str, u64)]) -> MonthlyTally {
        let mut tally = MonthlyTally::new();
        for &(month, author, n) in entries {
            for _ in 0..n {
                tally.increment(month, author);
            }
        }
        tally
    }

    // ── ranked_authors ───────────────────────────────────────────────────────

    #[test]
    fn test_ranked_authors_descending() {
        let tally = tally_from(&[("01/20", "Alice", 3), ("01/20", "Bob", 5)]);
        let ranked = ranked_authors(tally.month("01/20").unwrap());
        assert_eq!(ranked, vec![("Bob", 5), ("Alice", 3)]);
    }

    #[test]
    fn test_ranked_authors_ties_keep_first_seen_order() {
        let tally = tally_from(&[
            ("01/20", "Carol", 2),
            ("01/20", "Alice", 7),
            ("01/20", "Bob", 2),
            ("01/20", "Dave", 2),
        ]);
        let ranked = ranked_authors(tally.month("01/20").unwrap());
        assert_eq!(
            ranked,
            vec![("Alice", 7), ("Carol", 2), ("Bob", 2), ("Dave", 2)]
        );
    }

    // ── format_report ────────────────────────────────────────────────────────

    #[test]
    fn test_format_report_empty() {
        assert!(format_report(&MonthlyTally::new()).is_empty());
    }

    #[test]
    fn test_format_report_single_month() {
        let tally = tally_from(&[("01/20", "Alice", 1)]);
        assert_eq!(format_report(&tally), vec!["01/20", "Alice: 1", ""]);
    }

    #[test]
    fn test_format_report_orders_authors_by_count() {
        let tally = tally_from(&[("01/20", "Alice", 3), ("01/20", "Bob", 5)]);
        assert_eq!(
            format_report(&tally),
            vec!["01/20", "Bob: 5", "Alice: 3", ""]
        );
    }

    #[test]
    fn test_format_report_months_in_insertion_order() {
        // Insertion order wins over lexical or calendar order.
        let tally = tally_from(&[
            ("11/20", "Alice", 1),
            ("02/20", "Bob", 2),
            ("11/20", "Bob", 4),
        ]);
        assert_eq!(
            format_report(&tally),
            vec![
                "11/20", "Bob: 4", "Alice: 1", "", //
                "02/20", "Bob: 2", "",
            ]
        );
    }

    #[test]
    fn test_format_report_keeps_unicode_authors() {
        let tally = tally_from(&[("05/20", "Zoë 🌻", 2)]);
        assert_eq!(format_report(&tally), vec!["05/20", "Zoë 🌻: 2", ""]);
    }

    // ── write_report ─────────────────────────────────────────────────────────

    #[test]
    fn test_write_report_newline_terminated() {
        let tally = tally_from(&[("01/20", "Alice", 2), ("02/20", "Bob", 1)]);
        let mut buf: Vec<u8> = Vec::new();
        write_report(&tally, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "01/20\nAlice: 2\n\n02/20\nBob: 1\n\n");
    }

    #[test]
    fn test_write_report_empty_writes_nothing() {
        let mut buf: Vec<u8> = Vec::new();
        write_report(&MonthlyTally::new(), &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
