//! Integration tests for the full store-to-projection flow.
//!
//! Drives the sample store through the renderer's loop: list with a
//! filter, derive per-card display metadata, toggle a registration, and
//! re-project the updated state.

#![allow(clippy::unwrap_used)]

use gather_store::{EventStore, sample_store};
use gather_types::{Category, EventFilter, EventId};
use gather_view::{
    RegistrationStatus, category_color, category_label, list_by_filter, long_date,
    registration_status, spots_summary,
};

#[test]
fn sample_listing_renders_all_cards_in_order() {
    let store = sample_store().unwrap();
    let cards = list_by_filter(store.events(), EventFilter::All);
    assert_eq!(cards.len(), 5);

    let titles: Vec<&str> = cards.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Monthly Community Meeting",
            "Senior Fitness Class",
            "Computer Basics Workshop",
            "Movie Night: Classic Films",
            "Volunteer Opportunity: Food Bank",
        ]
    );
}

#[test]
fn fitness_filter_projects_single_card() {
    let store = sample_store().unwrap();
    let cards = list_by_filter(store.events(), EventFilter::Only(Category::Fitness));
    assert_eq!(cards.len(), 1);

    let card = cards.first().copied().unwrap();
    assert_eq!(card.id, EventId::new(2));
    assert_eq!(category_label(card.category), "Fitness");
    assert_eq!(category_color(card.category).token_name(), "success");
    // Seeded with the viewer already registered.
    assert_eq!(registration_status(card), RegistrationStatus::Registered);
    assert_eq!(spots_summary(card), "18/20 registered");
}

#[test]
fn card_metadata_matches_seeded_state() {
    let store = sample_store().unwrap();
    let first = store.get(EventId::new(1)).unwrap();

    assert_eq!(long_date(first.date), "Thursday, January 25, 2024");
    assert_eq!(first.time, "2:00 PM - 4:00 PM");
    assert_eq!(registration_status(first), RegistrationStatus::Open);
    assert!(registration_status(first).is_interactive());
    assert_eq!(registration_status(first).label(), "Register Now");
}

#[test]
fn toggling_reprojects_the_card() {
    let mut store = sample_store().unwrap();

    let updated = store.toggle_registration(EventId::new(1)).unwrap();
    assert_eq!(registration_status(&updated), RegistrationStatus::Registered);
    assert_eq!(spots_summary(&updated), "46/100 registered");

    let reverted = store.toggle_registration(EventId::new(1)).unwrap();
    assert_eq!(registration_status(&reverted), RegistrationStatus::Open);
    assert_eq!(spots_summary(&reverted), "45/100 registered");
}

#[test]
fn full_event_projects_inert_control_and_blocks_toggle() {
    let mut full = sample_store().unwrap().events().to_vec();
    for event in &mut full {
        event.registered = event.capacity;
        event.is_registered = false;
    }
    let mut store = EventStore::from_seed(full).unwrap();

    let card = store.get(EventId::new(4)).cloned().unwrap();
    let status = registration_status(&card);
    assert_eq!(status, RegistrationStatus::Full);
    assert!(!status.is_interactive());
    assert_eq!(status.label(), "Event Full");

    // The store enforces what the inert control implies.
    assert!(store.toggle_registration(EventId::new(4)).is_err());
    assert_eq!(store.get(EventId::new(4)).cloned(), Some(card));
}
