//! Default sample seed for the Gather event-registration core.
//!
//! Five community events covering every category, used as the demo dataset
//! and as the canonical fixture in tests. Real deployments seed the store
//! from an external source instead; the seeding format is the caller's
//! concern since [`Event`] deserializes from any serde format.

use chrono::NaiveDate;
use gather_types::{Category, Event, EventId};

use crate::error::StoreError;
use crate::store::EventStore;

/// Helper to build a calendar date from literal year/month/day parts.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Helper to build an [`Event`] from its display fields.
#[allow(clippy::too_many_arguments)] // Mirrors the full event record; a builder would obscure the seed table.
fn event(
    id: u32,
    title: &str,
    description: &str,
    when: NaiveDate,
    time: &str,
    location: &str,
    category: Category,
    capacity: u32,
    registered: u32,
    is_registered: bool,
) -> Event {
    Event {
        id: EventId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        date: when,
        time: time.to_string(),
        location: location.to_string(),
        category,
        capacity,
        registered,
        is_registered,
    }
}

/// The default five-event sample seed, one event per category.
pub fn sample_events() -> Vec<Event> {
    vec![
        event(
            1,
            "Monthly Community Meeting",
            "Join us for our monthly community meeting where we discuss upcoming \
             events, share announcements, and connect with neighbors.",
            date(2024, 1, 25),
            "2:00 PM - 4:00 PM",
            "Clubhouse Main Hall",
            Category::Social,
            100,
            45,
            false,
        ),
        event(
            2,
            "Senior Fitness Class",
            "Gentle exercise class designed for seniors. Includes chair exercises, \
             light stretching, and balance activities.",
            date(2024, 1, 26),
            "10:00 AM - 11:00 AM",
            "Fitness Center",
            Category::Fitness,
            20,
            18,
            true,
        ),
        event(
            3,
            "Computer Basics Workshop",
            "Learn the basics of using computers and smartphones. Topics include \
             email, internet browsing, and video calling.",
            date(2024, 1, 28),
            "1:00 PM - 3:00 PM",
            "Computer Lab",
            Category::Educational,
            15,
            12,
            false,
        ),
        event(
            4,
            "Movie Night: Classic Films",
            "Enjoy a screening of classic movies from the golden age of cinema. \
             Popcorn and refreshments provided.",
            date(2024, 1, 30),
            "7:00 PM - 9:00 PM",
            "Recreation Center",
            Category::Entertainment,
            80,
            67,
            false,
        ),
        event(
            5,
            "Volunteer Opportunity: Food Bank",
            "Help sort and pack food donations for local families in need. \
             Training provided, all skill levels welcome.",
            date(2024, 2, 2),
            "9:00 AM - 12:00 PM",
            "Community Center",
            Category::Volunteer,
            25,
            8,
            false,
        ),
    ]
}

/// Build an [`EventStore`] from the sample seed.
///
/// # Errors
///
/// Returns [`StoreError`] if the store rejects the seed (should not happen
/// with the valid hard-coded data).
pub fn sample_store() -> Result<EventStore, StoreError> {
    EventStore::from_seed(sample_events())
}
