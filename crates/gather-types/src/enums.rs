//! Enumeration types for the Gather event-registration core.
//!
//! [`Category`] is a closed classification: every event belongs to exactly
//! one variant, and the mapping functions over it in `gather-view` are
//! total matches with no default branch. [`EventFilter`] lifts the
//! frontend's `"all"` sentinel into a real variant so filter dispatch is
//! exhaustive rather than stringly-typed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The nature of a community event.
///
/// Serialized lowercase (`"social"`, `"fitness"`, ...) to match the
/// renderer's wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    /// Gatherings, meetings, and neighborly get-togethers.
    Social,
    /// Classes, workshops, and skill-building sessions.
    Educational,
    /// Exercise classes and physical activities.
    Fitness,
    /// Screenings, performances, and recreation.
    Entertainment,
    /// Community service and helping opportunities.
    Volunteer,
}

impl Category {
    /// All categories in display order.
    ///
    /// Used by the renderer to build the filter button row.
    pub const ALL: [Self; 5] = [
        Self::Social,
        Self::Educational,
        Self::Fitness,
        Self::Entertainment,
        Self::Volunteer,
    ];
}

// ---------------------------------------------------------------------------
// EventFilter
// ---------------------------------------------------------------------------

/// Filter selection for the event listing view.
///
/// Either the `"all"` sentinel or a single [`Category`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum EventFilter {
    /// Show every event regardless of category.
    #[default]
    All,
    /// Show only events of the given category.
    Only(Category),
}

impl EventFilter {
    /// Whether an event of the given category passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}
