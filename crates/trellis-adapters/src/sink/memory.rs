//! Recording listing sink for testing.

use std::sync::{Arc, Mutex};

use trellis_core::{
    application::{ApplicationError, ports::ListingSink},
    domain::Listing,
    error::TrellisResult,
};

/// Keeps every listing it is given instead of showing it.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    shown: Arc<Mutex<Vec<Listing>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listings received so far, oldest first.
    pub fn listings(&self) -> Vec<Listing> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// The most recent listing, if any.
    pub fn last(&self) -> Option<Listing> {
        self.listings().pop()
    }
}

impl ListingSink for MemorySink {
    fn display(&self, listing: &Listing) -> TrellisResult<()> {
        self.shown
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(listing.clone());
        Ok(())
    }
}
