// Plain-text report formatting. Nothing here touches the network or the
// terminal; callers write the returned strings wherever they like.

use crate::patient::RiskCategory;

pub const WIDE_RULE: usize = 70;
pub const NARROW_RULE: usize = 60;

/// Error messages in table rows are cut to this many characters.
pub const ERROR_PREVIEW_CHARS: usize = 30;

pub const MATCH_MARK: &str = "✅";
pub const MISMATCH_MARK: &str = "⚠️";

pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Title framed by two `=` rules.
pub fn banner(title: &str, width: usize) -> String {
    let line = rule('=', width);
    format!("{line}\n   {title}\n{line}")
}

pub fn table_header() -> String {
    let line = rule('-', WIDE_RULE);
    format!(
        "{line}\n{:<3} {:<22} {:<8} {:<8} {:<8} {}\n{line}",
        "#", "Name", "Expected", "Actual", "Prob", "Match"
    )
}

/// What happened to one sample patient.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Predicted {
        expected: RiskCategory,
        actual: String,
        event_probability: f64,
    },
    Failed { error: String },
}

impl RowOutcome {
    pub fn is_match(&self) -> bool {
        match self {
            RowOutcome::Predicted { expected, actual, .. } => expected.matches(actual),
            RowOutcome::Failed { .. } => false,
        }
    }
}

/// Format one table row. `index` is 1-based.
pub fn table_row(index: usize, name: &str, outcome: &RowOutcome) -> String {
    match outcome {
        RowOutcome::Predicted {
            expected,
            actual,
            event_probability,
        } => {
            let mark = if outcome.is_match() { MATCH_MARK } else { MISMATCH_MARK };
            format!(
                "{:<3} {:<22} {:<8} {:<8} {:>5.1}%  {}",
                index,
                name,
                expected,
                actual,
                event_probability * 100.0,
                mark
            )
        }
        RowOutcome::Failed { error } => {
            format!("{:<3} {:<22} ERROR: {}", index, name, truncate(error, ERROR_PREVIEW_CHARS))
        }
    }
}

/// Keep the first `max` characters of `s` (not bytes).
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Matched/different counters for the population run. Errors count as
/// different.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &RowOutcome) {
        if outcome.is_match() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

pub fn summary(tally: &Tally) -> String {
    format!(
        "   SUMMARY: {} matched expected, {} different\n   Note: Different results may indicate model calibration differences",
        tally.passed, tally.failed
    )
}

pub fn deletion_line(name: &str, deleted: bool) -> String {
    if deleted {
        format!("✅ Deleted: {}", name)
    } else {
        format!("❌ Failed to delete: {}", name)
    }
}

pub fn deletion_summary(deleted: usize, allow_listed: usize) -> String {
    format!("     Total deleted: {}/{}", deleted, allow_listed)
}
