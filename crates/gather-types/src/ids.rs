//! The strongly-typed event identifier.
//!
//! Event ids are small integers assigned by the seeding source and stable
//! for the lifetime of the store. The newtype prevents accidental mixing
//! with other integer quantities (capacities, counts) at compile time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for an event in the store.
///
/// Ids are assigned once at seed time and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventId(pub u32);

impl EventId {
    /// Wrap a raw integer id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EventId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<EventId> for u32 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_matches_inner() {
        let id = EventId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = EventId::new(7);
        let json = serde_json::to_string(&original).ok();
        assert_eq!(json.as_deref(), Some("7"));
        let restored: Result<EventId, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }
}
