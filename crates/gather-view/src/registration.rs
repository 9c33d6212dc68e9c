//! Registration button state derivation.
//!
//! The registration control is a tri-state presentation of one event's
//! capacity and viewer state. There is no state machine behind it -- each
//! status is recomputed from the event after every store operation.

use gather_types::Event;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Presentation state of the registration control for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RegistrationStatus {
    /// The viewer holds a reservation.
    Registered,
    /// The viewer holds no reservation and the event is at capacity.
    Full,
    /// Spots remain and the viewer holds no reservation.
    Open,
}

impl RegistrationStatus {
    /// Whether the registration control responds to input.
    ///
    /// A full event cannot be joined, so `Full` is the one inert state;
    /// a registered viewer can always leave.
    pub const fn is_interactive(self) -> bool {
        !matches!(self, Self::Full)
    }

    /// Button caption for this status.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Registered => "\u{2713} Registered",
            Self::Full => "Event Full",
            Self::Open => "Register Now",
        }
    }
}

/// Derive the registration control state for one event.
pub const fn registration_status(event: &Event) -> RegistrationStatus {
    if event.is_registered {
        RegistrationStatus::Registered
    } else if event.is_full() {
        RegistrationStatus::Full
    } else {
        RegistrationStatus::Open
    }
}

/// The "45/100 registered" attendance line for an event card.
pub fn spots_summary(event: &Event) -> String {
    format!("{}/{} registered", event.registered, event.capacity)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use gather_types::{Category, EventId};

    use super::*;

    fn event(capacity: u32, registered: u32, is_registered: bool) -> Event {
        Event {
            id: EventId::new(1),
            title: "Test Event".to_string(),
            description: "A test event.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 25).unwrap_or_default(),
            time: "2:00 PM - 4:00 PM".to_string(),
            location: "Clubhouse".to_string(),
            category: Category::Social,
            capacity,
            registered,
            is_registered,
        }
    }

    #[test]
    fn registered_viewer_sees_registered() {
        let status = registration_status(&event(20, 18, true));
        assert_eq!(status, RegistrationStatus::Registered);
        assert!(status.is_interactive());
        assert_eq!(status.label(), "\u{2713} Registered");
    }

    #[test]
    fn full_event_blocks_unregistered_viewer() {
        let status = registration_status(&event(80, 80, false));
        assert_eq!(status, RegistrationStatus::Full);
        assert!(!status.is_interactive());
        assert_eq!(status.label(), "Event Full");
    }

    #[test]
    fn registered_viewer_at_capacity_can_still_leave() {
        let status = registration_status(&event(20, 20, true));
        assert_eq!(status, RegistrationStatus::Registered);
        assert!(status.is_interactive());
    }

    #[test]
    fn open_event_invites_registration() {
        let status = registration_status(&event(100, 45, false));
        assert_eq!(status, RegistrationStatus::Open);
        assert!(status.is_interactive());
        assert_eq!(status.label(), "Register Now");
    }

    #[test]
    fn spots_summary_formats_counts() {
        assert_eq!(spots_summary(&event(100, 45, false)), "45/100 registered");
        assert_eq!(spots_summary(&event(20, 20, true)), "20/20 registered");
    }
}
