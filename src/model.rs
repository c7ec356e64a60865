//! In-memory representation of Go cover profiles and the records derived
//! from them. Parsers produce `Profile`s; `parse` turns them into
//! `Coverage` records which both aggregators consume.

use std::collections::BTreeMap;

use serde::Serialize;

/// Compute a coverage rate, returning 0.0 when the total is zero.
#[must_use]
pub fn rate(covered: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        covered as f64 / total as f64
    }
}

/// A contiguous, inclusive range of source lines with its statement count
/// and how many times it was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub num_stmt: u32,
    pub count: u64,
}

impl Block {
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.count > 0
    }

    /// Number of source lines spanned, both ends included.
    #[must_use]
    pub fn line_count(&self) -> u64 {
        u64::from(self.end_line.saturating_sub(self.start_line)) + 1
    }
}

/// Raw per-file output of the profile reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub file_name: String,
    /// Counting mode from the header, usually `set`, `count` or `atomic`.
    pub mode: String,
    pub blocks: Vec<Block>,
}

/// One source file's blocks together with the repository location its
/// identifier decomposes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// The identifier exactly as it appeared in the report.
    pub file_name: String,
    pub host: String,
    pub owner: String,
    /// Empty when the identifier has no repository segment.
    pub repo: String,
    pub path: String,
    pub blocks: Vec<Block>,
}

/// Totals across every block of every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallCoverageBreakdown {
    pub total_lines: u64,
    pub total_covered_lines: u64,
    pub percent_by_lines: f64,
    pub total_statements: u64,
    pub total_covered_statements: u64,
    pub percent_by_statements: f64,
}

impl OverallCoverageBreakdown {
    #[must_use]
    pub fn line_rate(&self) -> f64 {
        rate(self.total_covered_lines, self.total_lines)
    }

    #[must_use]
    pub fn statement_rate(&self) -> f64 {
        rate(self.total_covered_statements, self.total_statements)
    }
}

/// Group name → group key → covered/total statement ratio.
pub type ParseGroupResult = BTreeMap<String, BTreeMap<String, f64>>;
