//! Decomposes a module-style file identifier such as
//! `github.com/owner/repo/pkg/file.go` into its repository location.
//!
//! The identifier must carry at least two `/` separators. The first segment
//! is the host, the second the owner. A third segment is only taken as the
//! repository when something follows it; otherwise the repository is empty
//! and everything after the owner is the path.

use serde::Serialize;

use crate::error::{CovgroupError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub path: String,
}

impl Identity {
    /// `host/owner/repo`, or `host/owner` when there is no repository segment.
    #[must_use]
    pub fn repository(&self) -> String {
        if self.repo.is_empty() {
            format!("{}/{}", self.host, self.owner)
        } else {
            format!("{}/{}/{}", self.host, self.owner, self.repo)
        }
    }
}

pub fn extract_identity(file_name: &str) -> Result<Identity> {
    let invalid = || CovgroupError::invalid(format!("invalid coverage file name {file_name:?}"));

    let (host, rest) = file_name.split_once('/').ok_or_else(invalid)?;
    let (owner, rest) = rest.split_once('/').ok_or_else(invalid)?;
    let (repo, path) = rest.split_once('/').unwrap_or(("", rest));

    Ok(Identity {
        host: host.to_string(),
        owner: owner.to_string(),
        repo: repo.to_string(),
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_four_segments() {
        let id = extract_identity("github.com/heynemann/gocovparser/gocovparser/core.go").unwrap();
        assert_eq!(id.host, "github.com");
        assert_eq!(id.owner, "heynemann");
        assert_eq!(id.repo, "gocovparser");
        assert_eq!(id.path, "gocovparser/core.go");
        assert_eq!(id.repository(), "github.com/heynemann/gocovparser");
    }

    #[test]
    fn test_extract_three_segments_has_no_repo() {
        let id = extract_identity("gopkg.in/yaml/decode.go").unwrap();
        assert_eq!(id.host, "gopkg.in");
        assert_eq!(id.owner, "yaml");
        assert_eq!(id.repo, "");
        assert_eq!(id.path, "decode.go");
        assert_eq!(id.repository(), "gopkg.in/yaml");
    }

    #[test]
    fn test_extract_trailing_slash() {
        let id = extract_identity("example.com/org/").unwrap();
        assert_eq!(id.repo, "");
        assert_eq!(id.path, "");

        let id = extract_identity("example.com/org/repo/").unwrap();
        assert_eq!(id.repo, "repo");
        assert_eq!(id.path, "");
    }

    #[test]
    fn test_extract_too_few_segments() {
        for name in ["main.go", "", "example.com/main.go"] {
            let err = extract_identity(name).unwrap_err();
            assert!(
                err.to_string().contains(&format!("{name:?}")),
                "error should name the identifier: {err}"
            );
        }
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9._-]{1,12}"
    }

    proptest! {
        #[test]
        fn prop_four_segment_round_trip(
            host in segment(),
            owner in segment(),
            repo in segment(),
            path in prop::collection::vec(segment(), 1..4),
        ) {
            let name = format!("{host}/{owner}/{repo}/{}", path.join("/"));
            let id = extract_identity(&name).unwrap();
            prop_assert_eq!(&id.repo, &repo);
            prop_assert_eq!(format!("{}/{}/{}/{}", id.host, id.owner, id.repo, id.path), name);
        }

        #[test]
        fn prop_three_segment_round_trip(host in segment(), owner in segment(), file in segment()) {
            let name = format!("{host}/{owner}/{file}");
            let id = extract_identity(&name).unwrap();
            prop_assert!(id.repo.is_empty());
            prop_assert_eq!(format!("{}/{}/{}", id.host, id.owner, id.path), name);
        }

        #[test]
        fn prop_no_slash_fails(name in "[^/]{0,24}") {
            prop_assert!(extract_identity(&name).is_err());
        }
    }
}
