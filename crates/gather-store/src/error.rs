//! Error types for the `gather-store` crate.
//!
//! All fallible operations in this crate return [`StoreError`] through the
//! standard [`Result`] type alias. Initialization errors are fatal to the
//! caller's startup; per-operation errors leave the store unchanged and are
//! surfaced as values, never panics.

use gather_types::EventId;

/// Errors that can occur during event-store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The seed collection violated a store invariant at initialization.
    #[error("invalid seed data: {0}")]
    InvalidSeedData(#[from] SeedDataError),

    /// The referenced event does not exist in the store.
    #[error("event not found: {0}")]
    NotFound(EventId),

    /// Registering was rejected because the event is at capacity.
    ///
    /// Reported-not-fatal: the store is unchanged and the renderer shows
    /// the action as blocked.
    #[error("event {event} is at capacity ({capacity})")]
    CapacityExceeded {
        /// The full event.
        event: EventId,
        /// Its maximum capacity.
        capacity: u32,
    },
}

/// The specific way a seed collection violated store invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedDataError {
    /// An event's attendance count exceeds its capacity.
    #[error("event {event}: registered count {registered} exceeds capacity {capacity}")]
    RegisteredOverCapacity {
        /// The offending event.
        event: EventId,
        /// Its attendance count.
        registered: u32,
        /// Its capacity bound.
        capacity: u32,
    },

    /// Two seed events share the same id.
    #[error("duplicate event id: {0}")]
    DuplicateId(EventId),
}
