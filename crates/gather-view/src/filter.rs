//! Category-filtered event listing.

use gather_types::{Event, EventFilter};

/// Return the events passing the filter, preserving original relative order.
///
/// [`EventFilter::All`] returns every event; a category filter returns only
/// its events. No match yields an empty vec, not an error.
pub fn list_by_filter(events: &[Event], filter: EventFilter) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| filter.matches(event.category))
        .collect()
}
