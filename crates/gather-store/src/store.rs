//! The event store: seed-order collection, id lookup, registration toggle.
//!
//! [`EventStore`] is the single authority over event state. Readers get
//! shared references only; the one mutating entry point is
//! [`EventStore::toggle_registration`], which applies its read-modify-write
//! indivisibly under `&mut self`. Running this store under shared access
//! (e.g. one store serving multiple viewers) requires the caller to
//! serialize toggles through a single owner; nothing here suspends or
//! blocks, so a plain mutex around the store suffices.

use std::collections::BTreeMap;

use gather_types::{Event, EventId};

use crate::error::{SeedDataError, StoreError};

/// The authoritative, ordered collection of events.
///
/// Events keep their seed order for listing; a position index provides
/// id lookup without disturbing that order.
#[derive(Debug, Clone)]
pub struct EventStore {
    /// Events in their original seed order.
    events: Vec<Event>,
    /// Position of each event id within `events`.
    index: BTreeMap<EventId, usize>,
}

impl EventStore {
    /// Build a store from a seed collection, validating store invariants.
    ///
    /// Accepted events are held in their original order. An empty seed is
    /// valid and yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidSeedData`] if any event's attendance
    /// count exceeds its capacity, or if two events share an id. The first
    /// violation encountered is reported.
    pub fn from_seed(events: impl IntoIterator<Item = Event>) -> Result<Self, StoreError> {
        let mut accepted = Vec::new();
        let mut index = BTreeMap::new();

        for event in events {
            if !event.within_capacity() {
                return Err(SeedDataError::RegisteredOverCapacity {
                    event: event.id,
                    registered: event.registered,
                    capacity: event.capacity,
                }
                .into());
            }
            if index.insert(event.id, accepted.len()).is_some() {
                return Err(SeedDataError::DuplicateId(event.id).into());
            }
            accepted.push(event);
        }

        tracing::debug!(count = accepted.len(), "event store seeded");
        Ok(Self {
            events: accepted,
            index,
        })
    }

    /// All events in seed order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up a single event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.index.get(&id).and_then(|slot| self.events.get(*slot))
    }

    /// Whether an event with the given id exists.
    pub fn contains(&self, id: EventId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of events in the store.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Toggle the viewer's registration for one event.
    ///
    /// If the viewer is not registered, registering is rejected when the
    /// event is at capacity; otherwise the attendance count goes up by one
    /// and the viewer is marked registered. If the viewer is registered,
    /// unregistering always succeeds and the count goes down by one --
    /// never capacity-blocked, even if the capacity was lowered externally
    /// below the current count.
    ///
    /// The decision and the field writes form one indivisible
    /// read-modify-write; every other event is untouched.
    ///
    /// Returns a copy of the updated event.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no event has the given id, or
    /// [`StoreError::CapacityExceeded`] if registering into a full event.
    /// The store is unchanged in both cases.
    pub fn toggle_registration(&mut self, id: EventId) -> Result<Event, StoreError> {
        let slot = self.index.get(&id).copied().ok_or(StoreError::NotFound(id))?;
        let event = self.events.get_mut(slot).ok_or(StoreError::NotFound(id))?;

        if event.is_registered {
            event.is_registered = false;
            event.registered = event.registered.saturating_sub(1);
            tracing::debug!(
                event = %id,
                registered = event.registered,
                capacity = event.capacity,
                "viewer unregistered"
            );
        } else {
            if event.is_full() {
                tracing::warn!(
                    event = %id,
                    capacity = event.capacity,
                    "registration rejected: event at capacity"
                );
                return Err(StoreError::CapacityExceeded {
                    event: id,
                    capacity: event.capacity,
                });
            }
            event.is_registered = true;
            event.registered = event.registered.saturating_add(1);
            tracing::debug!(
                event = %id,
                registered = event.registered,
                capacity = event.capacity,
                "viewer registered"
            );
        }

        Ok(event.clone())
    }
}
