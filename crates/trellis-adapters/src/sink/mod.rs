//! Listing sink adapters.

mod memory;

pub use memory::MemorySink;
