//! Output formatting for coverage breakdowns and grouped ratios.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::model::{OverallCoverageBreakdown, ParseGroupResult};

/// Everything a command wants to print.
#[derive(Debug, Default, Serialize)]
pub struct CoverageReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<OverallCoverageBreakdown>,
    #[serde(skip_serializing_if = "ParseGroupResult::is_empty")]
    pub groups: ParseGroupResult,
}

impl CoverageReport {
    pub fn format(&self, formatter: &dyn ReportFormatter) -> Result<String> {
        formatter.format(self)
    }
}

pub trait ReportFormatter {
    fn format(&self, report: &CoverageReport) -> Result<String>;
}

/// Output style selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    Text,
    Json,
}

impl Style {
    pub fn formatter(&self) -> &'static dyn ReportFormatter {
        match self {
            Style::Text => &TextFormatter,
            Style::Json => &JsonFormatter,
        }
    }
}

/// Plain text formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &CoverageReport) -> Result<String> {
        let mut out = String::new();

        for (name, keys) in &report.groups {
            writeln!(out, "{:<60} {:>8}", name.to_uppercase(), "RATE")?;
            writeln!(out, "{}", "-".repeat(69))?;
            if keys.is_empty() {
                writeln!(out, "(no files)")?;
            }
            for (key, ratio) in keys {
                let pct = ratio * 100.0;
                writeln!(out, "{key:<60} {pct:>7.1}%")?;
            }
            out.push('\n');
        }

        if let Some(b) = &report.breakdown {
            writeln!(
                out,
                "Lines:       {}/{} ({:.1}%)",
                b.total_covered_lines,
                b.total_lines,
                b.percent_by_lines * 100.0
            )?;
            writeln!(
                out,
                "Statements:  {}/{} ({:.1}%)",
                b.total_covered_statements,
                b.total_statements,
                b.percent_by_statements * 100.0
            )?;
        }

        Ok(out)
    }
}

/// Pretty-printed JSON formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &CoverageReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    }
}
