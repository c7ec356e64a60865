//! Statement coverage bucketed by caller-defined keys.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use tracing::warn;

use crate::error::Result;
use crate::identity::extract_identity;
use crate::model::{rate, Coverage, ParseGroupResult};

type KeyFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A named grouping policy: maps a file identifier to the key it is
/// bucketed under.
pub struct ParseGroup {
    pub name: String,
    key_fn: KeyFn,
}

impl ParseGroup {
    pub fn new<F>(name: impl Into<String>, key_fn: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            key_fn: Box::new(key_fn),
        }
    }

    pub fn key(&self, file_name: &str) -> String {
        (self.key_fn)(file_name)
    }
}

impl fmt::Debug for ParseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseGroup").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Built-in grouping policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Host,
    /// `host/owner`
    Owner,
    /// `host/owner/repo`
    Repository,
    /// Identifier up to its last `/`.
    Directory,
    File,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Host => "host",
            GroupBy::Owner => "owner",
            GroupBy::Repository => "repository",
            GroupBy::Directory => "directory",
            GroupBy::File => "file",
        }
    }

    pub fn key(&self, file_name: &str) -> String {
        match self {
            GroupBy::File => file_name.to_string(),
            GroupBy::Directory => file_name
                .rsplit_once('/')
                .map_or(file_name, |(dir, _)| dir)
                .to_string(),
            GroupBy::Host | GroupBy::Owner | GroupBy::Repository => {
                let identity = match extract_identity(file_name) {
                    Ok(identity) => identity,
                    Err(e) => {
                        warn!("grouping {file_name} by itself: {e}");
                        return file_name.to_string();
                    }
                };
                match self {
                    GroupBy::Host => identity.host,
                    GroupBy::Owner => format!("{}/{}", identity.host, identity.owner),
                    _ => identity.repository(),
                }
            }
        }
    }

    pub fn into_group(self) -> ParseGroup {
        ParseGroup::new(self.as_str(), move |file_name| self.key(file_name))
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Default)]
struct Tally {
    statements: u64,
    covered: u64,
}

/// Ratio of covered to total statements for every key each group produces.
///
/// Groups are evaluated independently; groups sharing a name accumulate into
/// the same bucket. A key whose files have no statements is reported as 0.0.
/// Never fails today; the `Result` leaves room for input validation.
pub fn group_coverage(items: &[Coverage], groups: &[ParseGroup]) -> Result<ParseGroupResult> {
    let mut tallies: BTreeMap<&str, BTreeMap<String, Tally>> = BTreeMap::new();

    for group in groups {
        let bucket = tallies.entry(group.name.as_str()).or_default();

        for cov in items {
            let tally = bucket.entry(group.key(&cov.file_name)).or_default();
            for block in &cov.blocks {
                let statements = u64::from(block.num_stmt);
                tally.statements += statements;
                if block.is_covered() {
                    tally.covered += statements;
                }
            }
        }
    }

    Ok(tallies
        .into_iter()
        .map(|(name, bucket)| {
            let ratios = bucket
                .into_iter()
                .map(|(key, t)| (key, rate(t.covered, t.statements)))
                .collect();
            (name.to_string(), ratios)
        })
        .collect())
}
