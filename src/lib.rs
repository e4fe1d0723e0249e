//! GitHub Project Metadata Aggregation Service
//!
//! Answers `GET /projectinfo/v1/{git-host}/{owner}/{project}` with a single
//! JSON document combining a repository's top contributor and its language
//! breakdown, both fetched live from the GitHub REST API.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 PROJECTINFO                   │
//!                     │                                               │
//!   Client Request    │  ┌─────────┐    ┌───────────┐                │
//!   ──────────────────┼─▶│  http   │───▶│  routing  │                │
//!                     │  │ server  │    │ validator │                │
//!                     │  └─────────┘    └─────┬─────┘                │
//!                     │                       │                      │
//!                     │                       ▼                      │
//!                     │               ┌──────────────┐               │
//!                     │               │   upstream   │───────────────┼──▶ GitHub
//!                     │               │    client    │◀──────────────┼──  REST API
//!                     │               └──────┬───────┘               │
//!                     │                      │                       │
//!   Client Response   │  ┌──────────┐        ▼                       │
//!   ◀─────────────────┼──│ response │◀── aggregation                 │
//!                     │  │ assembly │                                │
//!                     │  └──────────┘                                │
//!                     │                                               │
//!                     │  ┌─────────────────────────────────────────┐ │
//!                     │  │          Cross-Cutting Concerns          │ │
//!                     │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                     │  │  │ config │ │observability│ │lifecycle│ │ │
//!                     │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                     │  └─────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
