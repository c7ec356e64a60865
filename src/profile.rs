/// Reader for Go's `-coverprofile` format.
///
/// Reference: https://go.dev/blog/cover
///
/// Format:
///   mode: <set|count|atomic>
///   <file>:<startLine>.<startCol>,<endLine>.<endCol> <numStatements> <count>
///
/// Blocks are kept exactly as written: one `Profile` per file in order of
/// first appearance, blocks in input order, overlapping or repeated ranges
/// left alone.
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ProfileError;
use crate::model::{Block, Profile};

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+):([0-9]+)\.([0-9]+),([0-9]+)\.([0-9]+) ([0-9]+) ([0-9]+)$").unwrap()
});

const MODE_PREFIX: &str = "mode: ";

/// Parse a whole profile into per-file block lists.
pub fn parse_profiles(input: &str) -> Result<Vec<Profile>, ProfileError> {
    let mut mode: Option<String> = None;
    let mut file_order: Vec<String> = Vec::new();
    let mut file_blocks: HashMap<String, Vec<Block>> = HashMap::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if mode.is_none() {
            mode = Some(parse_mode_line(line)?);
            continue;
        }

        // Concatenated profiles repeat the header.
        if line.starts_with(MODE_PREFIX) {
            continue;
        }

        let (file, block) = parse_block_line(line).ok_or_else(|| ProfileError::MalformedBlock {
            line_number: idx + 1,
            line: line.to_string(),
        })?;

        if !file_blocks.contains_key(file) {
            file_order.push(file.to_string());
        }
        file_blocks.entry(file.to_string()).or_default().push(block);
    }

    let Some(mode) = mode else {
        return Ok(Vec::new());
    };

    Ok(file_order
        .into_iter()
        .map(|file_name| {
            let blocks = file_blocks.remove(&file_name).unwrap_or_default();
            Profile {
                file_name,
                mode: mode.clone(),
                blocks,
            }
        })
        .collect())
}

/// Any non-empty mode is accepted; only the block lines are interpreted.
fn parse_mode_line(line: &str) -> Result<String, ProfileError> {
    match line.strip_prefix(MODE_PREFIX) {
        Some(mode) if !mode.trim().is_empty() => Ok(mode.trim().to_string()),
        _ => Err(ProfileError::BadModeLine {
            line: line.to_string(),
        }),
    }
}

/// Parse a single block line, returning (file_name, Block).
fn parse_block_line(line: &str) -> Option<(&str, Block)> {
    let caps = BLOCK_RE.captures(line)?;
    let file = caps.get(1)?.as_str();
    let num = |i: usize| caps.get(i).map(|m| m.as_str());

    let block = Block {
        start_line: num(2)?.parse().ok()?,
        start_col: num(3)?.parse().ok()?,
        end_line: num(4)?.parse().ok()?,
        end_col: num(5)?.parse().ok()?,
        num_stmt: num(6)?.parse().ok()?,
        count: num(7)?.parse().ok()?,
    };

    if block.end_line < block.start_line {
        return None;
    }

    Some((file, block))
}
