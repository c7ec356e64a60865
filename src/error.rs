use thiserror::Error;

/// Failures raised by the raw cover-profile reader.
///
/// These never escape [`crate::parse::parse`] directly; they are carried as
/// the source of [`CovgroupError::InvalidCoverageData`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("bad mode line: {line:?}")]
    BadModeLine { line: String },

    #[error("line {line_number}: {line:?} doesn't match expected format")]
    MalformedBlock { line_number: usize, line: String },
}

#[derive(Error, Debug)]
pub enum CovgroupError {
    #[error("Invalid coverage data: {detail}")]
    InvalidCoverageData {
        detail: String,
        #[source]
        source: Option<ProfileError>,
    },
}

impl CovgroupError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        CovgroupError::InvalidCoverageData {
            detail: detail.into(),
            source: None,
        }
    }
}

impl From<ProfileError> for CovgroupError {
    fn from(err: ProfileError) -> Self {
        CovgroupError::InvalidCoverageData {
            detail: err.to_string(),
            source: Some(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, CovgroupError>;
