//! Request path validation.
//!
//! The service answers exactly one path shape:
//! `/projectinfo/v1/{git-host}/{owner}/{project}` where the git host is
//! `github.com` or `www.github.com`.

use thiserror::Error;

/// The inbound path does not follow the published template.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid URI")]
pub struct PathError;

/// Check that a request path matches the expected six-segment template.
///
/// Splitting on `/` yields an empty leading segment for a rooted path, so a
/// valid path produces exactly six segments.
pub fn validate_path(path: &str) -> Result<(), PathError> {
    let segments: Vec<&str> = path.split('/').collect();

    if segments.len() == 6
        && segments[1] == "projectinfo"
        && segments[2] == "v1"
        && (segments[3] == "github.com" || segments[3] == "www.github.com")
    {
        return Ok(());
    }

    Err(PathError)
}
