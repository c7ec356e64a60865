//! Turns a raw cover profile into `Coverage` records.

use tracing::debug;

use crate::error::Result;
use crate::identity::extract_identity;
use crate::model::{Coverage, Profile};
use crate::profile::parse_profiles;

/// Parse the text of a cover profile.
///
/// Surrounding whitespace is ignored and an empty report yields no records.
/// Any reader failure or undecomposable file identifier aborts the whole
/// parse with `InvalidCoverageData`.
pub fn parse(coverage_data: &str) -> Result<Vec<Coverage>> {
    let profiles = parse_profiles(coverage_data.trim())?;
    debug!(profiles = profiles.len(), "read cover profile");
    let records = from_profiles(profiles)?;
    debug!(records = records.len(), "built coverage records");
    Ok(records)
}

/// Build records from profiles that were already read.
pub fn from_profiles(profiles: Vec<Profile>) -> Result<Vec<Coverage>> {
    let mut coverage = Vec::with_capacity(profiles.len());

    for profile in profiles {
        let identity = extract_identity(&profile.file_name)?;
        coverage.push(Coverage {
            file_name: profile.file_name,
            host: identity.host,
            owner: identity.owner,
            repo: identity.repo,
            path: identity.path,
            blocks: profile.blocks,
        });
    }

    Ok(coverage)
}
