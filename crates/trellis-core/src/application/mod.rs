//! Application layer for Trellis.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Materializer, Reporter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no rules of
//! its own. What a valid definition is lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    MaterializeReport, // DTO for a materialize run
    Materializer,
    Reporter,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ListingSink, TouchOutcome};

pub use error::ApplicationError;
