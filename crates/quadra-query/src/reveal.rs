//! Incremental reveal window
//!
//! Views grow the displayed subset in fixed-size pages as the consumer
//! signals "need more" (scroll proximity). The window guards against
//! overlapping triggers with a plain in-flight flag; a second trigger
//! while one is pending is a no-op.

use serde::{Deserialize, Serialize};

/// Items appended per reveal step
pub const PAGE_SIZE: usize = 10;

/// The currently-displayed prefix of a filtered/sorted collection
///
/// The in-flight flag is transient UI state and is not serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealWindow {
    revealed: usize,

    #[serde(skip)]
    in_flight: bool,
}

impl RevealWindow {
    /// Window showing the first page
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            revealed: PAGE_SIZE,
            in_flight: false,
        }
    }

    /// Requested reveal count (may exceed the collection size)
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Whether a load-more operation is pending
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Start a load-more operation
    ///
    /// Returns `false` (and changes nothing) when one is already in
    /// flight.
    pub fn begin_load_more(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Finish the pending load-more operation, growing the window
    ///
    /// A completion without a matching begin is ignored.
    pub fn complete_load(&mut self) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        self.revealed += PAGE_SIZE;
    }

    /// Snap back to the first page
    ///
    /// Called whenever the base filtered/sorted list is reassembled.
    pub fn reset(&mut self) {
        self.revealed = PAGE_SIZE;
        self.in_flight = false;
    }

    /// Number of rows actually visible for a collection of `total`
    #[inline]
    #[must_use]
    pub fn visible_count(&self, total: usize) -> usize {
        self.revealed.min(total)
    }
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new()
    }
}
