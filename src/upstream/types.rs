//! Upstream response shapes and error definitions.

use serde::Deserialize;
use thiserror::Error;

/// One entry of the GitHub contributors listing.
///
/// The upstream array is ordered by contribution count descending, so the
/// first element is the top contributor. Fields the service does not use
/// are ignored by the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, or timeout failure before a response arrived.
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },

    /// Upstream body was not the expected JSON shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    /// The contributors listing for the repository is empty.
    #[error("contributors list is empty")]
    EmptyContributors,
}

/// Result type for upstream operations.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contributor_decoding_ignores_extra_fields() {
        let body = r#"[
          {
            "login": "ijuma",
            "id": 24747,
            "avatar_url": "https://avatars2.githubusercontent.com/u/24747?v=4",
            "contributions": 343
          },
          {
            "login": "hachikuji",
            "id": 12502538,
            "avatar_url": "https://avatars3.githubusercontent.com/u/12502538?v=4",
            "contributions": 261
          }]"#;

        let contributors: Vec<Contributor> = serde_json::from_str(body).unwrap();
        assert_eq!(contributors.len(), 2);
        assert_eq!(
            contributors[0],
            Contributor {
                login: "ijuma".into(),
                contributions: 343,
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "upstream returned HTTP 503");

        let err = FetchError::EmptyContributors;
        assert_eq!(err.to_string(), "contributors list is empty");
    }
}
