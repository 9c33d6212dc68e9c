//! The event entity.
//!
//! An [`Event`] is a schedulable community activity with capacity-bounded
//! attendance. The full set of events is seeded once at store
//! initialization; afterwards only the `registered`/`is_registered` pair
//! changes, and only through the store's registration toggle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Category;
use crate::ids::EventId;

/// A single community event with capacity-bounded attendance.
///
/// # Invariants
///
/// Maintained by `gather-store` for every event it owns:
///
/// - `registered <= capacity` at all times.
/// - `is_registered == true` implies the viewer's reservation is counted
///   within `registered`.
/// - `id` is unique within the store and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Stable unique identity, assigned by the seeding source.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Free-text display time range, e.g. `"2:00 PM - 4:00 PM"`.
    pub time: String,
    /// Free-text venue.
    pub location: String,
    /// Closed classification of the event's nature.
    pub category: Category,
    /// Maximum simultaneous registered attendees.
    pub capacity: u32,
    /// Current attendance count.
    pub registered: u32,
    /// Whether the current viewer holds a reservation.
    pub is_registered: bool,
}

impl Event {
    /// Whether the event has reached its attendance capacity.
    pub const fn is_full(&self) -> bool {
        self.registered >= self.capacity
    }

    /// Whether the attendance count respects the capacity bound.
    pub const fn within_capacity(&self) -> bool {
        self.registered <= self.capacity
    }

    /// Remaining open spots.
    ///
    /// Saturates at zero rather than underflowing if the count was pushed
    /// past capacity by an external seed change.
    pub const fn spots_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }
}
