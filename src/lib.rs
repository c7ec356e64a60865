pub mod breakdown;
pub mod cli;
pub mod error;
pub mod group;
pub mod identity;
pub mod model;
pub mod parse;
pub mod profile;
pub mod report;

pub use breakdown::total_breakdown;
pub use error::{CovgroupError, Result};
pub use group::{group_coverage, GroupBy, ParseGroup};
pub use identity::{extract_identity, Identity};
pub use model::{Block, Coverage, OverallCoverageBreakdown, ParseGroupResult};
pub use parse::parse;
