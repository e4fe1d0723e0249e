//! Response assembly and error mapping.
//!
//! # Responsibilities
//! - Combine the fetched pieces into the response body
//! - Map validation and upstream errors to appropriate HTTP status codes
//!
//! # Design Decisions
//! - Any failure short-circuits the request with a real error status; no
//!   partial body is ever written
//! - Upstream 404 surfaces as our 404 (unknown repo); other upstream
//!   problems are 502 since this service acts as a gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::routing::PathError;
use crate::upstream::{Contributor, FetchError};

/// The aggregated response body.
///
/// The languages array is emitted under the wire name `language`, the
/// published JSON contract of this endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub owner: String,
    pub project: String,
    pub committer: String,
    pub commits: u64,
    #[serde(rename = "language")]
    pub languages: Vec<String>,
}

impl ProjectInfo {
    /// Combine the validated pieces into one response body. Pure
    /// construction, no failure modes.
    pub fn assemble(
        owner: String,
        project: String,
        top: Contributor,
        languages: Vec<String>,
    ) -> Self {
        Self {
            owner,
            project,
            committer: top.login,
            commits: top.contributions,
            languages,
        }
    }
}

/// Everything that can fail while answering a request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ApiError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Path(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(FetchError::EmptyContributors) => StatusCode::NOT_FOUND,
            ApiError::Fetch(FetchError::Status { status: 404 }) => StatusCode::NOT_FOUND,
            ApiError::Fetch(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::warn!(
            status = %status,
            error = %self,
            "Request failed"
        );

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectInfo {
        ProjectInfo::assemble(
            "apache".into(),
            "kafka".into(),
            Contributor {
                login: "ijuma".into(),
                contributions: 343,
            },
            vec!["Java".into(), "Scala".into()],
        )
    }

    #[test]
    fn test_assemble_carries_contributor_fields() {
        let info = sample();
        assert_eq!(info.committer, "ijuma");
        assert_eq!(info.commits, 343);
        assert_eq!(info.languages.len(), 2);
    }

    #[test]
    fn test_languages_serialize_under_wire_name() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["language"], serde_json::json!(["Java", "Scala"]));
        assert!(value.get("languages").is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(PathError).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(FetchError::EmptyContributors).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(FetchError::Status { status: 404 }).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(FetchError::Status { status: 500 }).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(FetchError::Transport("connection refused".into())).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
