//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Validate → Init logging/metrics → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C received → broadcast shutdown → server drains → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
