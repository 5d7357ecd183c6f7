//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! use cases: "materialize a skeleton" and "report what is under a root".

pub mod materializer;
pub mod reporter;

#[cfg(test)]
pub(crate) mod test_support;

pub use materializer::{MaterializeReport, Materializer};
pub use reporter::Reporter;
