//! HTTP client for the GitHub REST API.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::upstream::types::{Contributor, FetchError, FetchResult};

/// Client for the two repository metadata endpoints the service aggregates.
///
/// Holds a connection-pooling [`reqwest::Client`]; cheap to share behind an
/// `Arc`. Every request carries the configured User-Agent and is bounded by
/// the configured timeout.
pub struct UpstreamClient {
    client: reqwest::Client,
    api_base: String,
}

impl UpstreamClient {
    /// Build a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL for a repository: `{api_base}/repos/{owner}/{project}`.
    ///
    /// Owner and project are used verbatim from the matched path segments.
    pub fn repo_url(&self, owner: &str, project: &str) -> String {
        format!("{}/repos/{}/{}", self.api_base, owner, project)
    }

    /// Fetch the top contributor of a repository.
    ///
    /// GitHub orders the contributors array by contribution count
    /// descending, so the first element is the top contributor. An empty
    /// array is an explicit error rather than an index panic.
    pub async fn top_contributor(&self, owner: &str, project: &str) -> FetchResult<Contributor> {
        let url = format!("{}/contributors", self.repo_url(owner, project));
        let contributors: Vec<Contributor> = self.get_json(&url).await?;

        contributors
            .into_iter()
            .next()
            .ok_or(FetchError::EmptyContributors)
    }

    /// Fetch the names of the languages used in a repository.
    ///
    /// Upstream returns a JSON object mapping language name to byte count;
    /// only the key set is kept. Decoding into a `BTreeMap` gives the
    /// resulting list a stable order.
    pub async fn languages(&self, owner: &str, project: &str) -> FetchResult<Vec<String>> {
        let url = format!("{}/languages", self.repo_url(owner, project));
        let breakdown: BTreeMap<String, u64> = self.get_json(&url).await?;

        Ok(breakdown.into_keys().collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        tracing::debug!(url = %url, "Fetching upstream resource");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
