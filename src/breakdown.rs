//! Totals across a whole report, by lines and by statements.

use crate::error::Result;
use crate::model::{Coverage, OverallCoverageBreakdown};

/// Sum every block of every record.
///
/// A block counts as covered when its hit count is non-zero; lines are the
/// inclusive span of the block. Percentages are 0.0 when nothing was seen.
/// Never fails today; the `Result` leaves room for input validation.
pub fn total_breakdown(items: &[Coverage]) -> Result<OverallCoverageBreakdown> {
    let mut result = OverallCoverageBreakdown::default();

    for block in items.iter().flat_map(|cov| &cov.blocks) {
        let lines = block.line_count();
        let statements = u64::from(block.num_stmt);
        result.total_lines += lines;
        result.total_statements += statements;

        if block.is_covered() {
            result.total_covered_lines += lines;
            result.total_covered_statements += statements;
        }
    }

    result.percent_by_lines = result.line_rate();
    result.percent_by_statements = result.statement_rate();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn record(blocks: Vec<Block>) -> Coverage {
        Coverage {
            file_name: "example.com/org/repo/f.go".to_string(),
            host: "example.com".to_string(),
            owner: "org".to_string(),
            repo: "repo".to_string(),
            path: "f.go".to_string(),
            blocks,
        }
    }

    fn block(start_line: u32, end_line: u32, num_stmt: u32, count: u64) -> Block {
        Block {
            start_line,
            start_col: 1,
            end_line,
            end_col: 1,
            num_stmt,
            count,
        }
    }

    #[test]
    fn test_total_breakdown_empty() {
        let b = total_breakdown(&[]).unwrap();
        assert_eq!(b, OverallCoverageBreakdown::default());
        assert_eq!(b.percent_by_lines, 0.0);
        assert_eq!(b.percent_by_statements, 0.0);
    }

    #[test]
    fn test_total_breakdown_lines_and_statements() {
        // 60 covered lines + 40 uncovered lines; every statement is in
        // a covered block.
        let items = vec![
            record(vec![block(1, 30, 20, 3), block(31, 70, 0, 0)]),
            record(vec![block(1, 30, 20, 1)]),
        ];
        let b = total_breakdown(&items).unwrap();

        assert_eq!(b.total_lines, 100);
        assert_eq!(b.total_covered_lines, 60);
        assert_eq!(b.percent_by_lines, 0.6);
        assert_eq!(b.total_statements, 40);
        assert_eq!(b.total_covered_statements, 40);
        assert_eq!(b.percent_by_statements, 1.0);
    }

    #[test]
    fn test_total_breakdown_counts_overlapping_blocks_twice() {
        let items = vec![record(vec![block(5, 10, 3, 2), block(8, 12, 2, 0)])];
        let b = total_breakdown(&items).unwrap();

        assert_eq!(b.total_lines, 11);
        assert_eq!(b.total_covered_lines, 6);
        assert_eq!(b.total_statements, 5);
        assert_eq!(b.total_covered_statements, 3);
    }

    #[test]
    fn test_total_breakdown_large_counts_stay_in_range() {
        let items = vec![record(vec![
            block(1, u32::MAX, u32::MAX, u64::MAX),
            block(1, u32::MAX, u32::MAX, u64::MAX),
            block(3, 4, 2, 0),
        ])];
        let b = total_breakdown(&items).unwrap();

        assert_eq!(b.total_statements, 2 * u64::from(u32::MAX) + 2);
        assert_eq!(b.total_covered_statements, 2 * u64::from(u32::MAX));
        assert!(b.percent_by_statements <= 1.0);
        assert!(b.percent_by_lines <= 1.0);
    }

    #[test]
    fn test_total_breakdown_is_repeatable() {
        let items = vec![record(vec![block(1, 3, 7, 1), block(4, 9, 5, 0)])];
        let first = total_breakdown(&items).unwrap();
        let second = total_breakdown(&items).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.percent_by_lines.to_bits(), second.percent_by_lines.to_bits());
    }
}
