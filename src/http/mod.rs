//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route dispatch)
//!     → request.rs (add request ID)
//!     → [routing validator checks the path template]
//!     → [upstream client fetches contributor + languages]
//!     → response.rs (assemble body, map errors to status codes)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::{ApiError, ProjectInfo};
pub use server::HttpServer;
