//! Upstream GitHub API subsystem.
//!
//! # Data Flow
//! ```text
//! owner/project pair
//!     → client.rs (build URL, issue GET, check status)
//!     → types.rs (decode JSON into domain shapes)
//!     → handler consumes Contributor / language list
//! ```
//!
//! # Design Decisions
//! - One outbound request per call; no retries, no caching
//! - The API base URL is configurable so tests can point at a mock server
//! - Non-2xx upstream statuses are surfaced as errors before any decoding

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{Contributor, FetchError, FetchResult};
