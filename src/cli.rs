//! Command handler functions for the covgroup CLI.
//!
//! Each `cmd_*` function returns its output as a `String`, making them easy
//! to test without capturing stdout.

use std::path::Path;

use anyhow::{Context, Result};

use crate::breakdown::total_breakdown;
use crate::group::{group_coverage, GroupBy, ParseGroup};
use crate::parse::parse;
use crate::report::{CoverageReport, Style};

/// Read a cover profile from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("Failed to read coverage from stdin")
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read coverage file {}", path.display()))
    }
}

pub fn cmd_summary(coverage_data: &str, style: Style) -> Result<String> {
    let items = parse(coverage_data)?;
    let report = CoverageReport {
        breakdown: Some(total_breakdown(&items)?),
        ..Default::default()
    };
    report.format(style.formatter())
}

pub fn cmd_group(
    coverage_data: &str,
    by: &[GroupBy],
    totals: bool,
    style: Style,
) -> Result<String> {
    let items = parse(coverage_data)?;
    let groups: Vec<ParseGroup> = by.iter().map(|g| g.into_group()).collect();

    let report = CoverageReport {
        breakdown: if totals {
            Some(total_breakdown(&items)?)
        } else {
            None
        },
        groups: group_coverage(&items, &groups)?,
    };
    report.format(style.formatter())
}
