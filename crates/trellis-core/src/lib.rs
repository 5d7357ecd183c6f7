//! Trellis Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Trellis, a tool
//! that lays down empty web-app skeletons (folders plus zero-byte files) and
//! reports what ended up on disk.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trellis-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │        (Materializer, Reporter)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, ListingSink)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    trellis-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScaffoldDefinition, RelativePath, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trellis_core::prelude::*;
//!
//! // 1. Describe the skeleton
//! let definition = ScaffoldDefinition::builder("My Site")
//!     .entry("", ["index.html"])
//!     .entry("styles", ["main.css"])
//!     .build()?;
//!
//! // 2. Materialize with an injected filesystem adapter
//! let report = Materializer::new(filesystem).materialize("./site", &definition)?;
//!
//! // 3. Hand the listing to a sink
//! Reporter::new(filesystem).report("./site", definition.name(), definition.column(), &sink)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MaterializeReport, Materializer, Reporter,
        ports::{Filesystem, ListingSink, TouchOutcome},
    };
    pub use crate::domain::{
        DuplicateFolders, Listing, RelativePath, ScaffoldDefinition, ScaffoldEntry,
    };
    pub use crate::error::{TrellisError, TrellisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
