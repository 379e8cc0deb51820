//! This module provides read-with-fallback access to the event catalogue

use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::seed;
use crate::traits::KeyValueStore;
use crate::{Event, Organizer};

/// Backing-store slot holding the JSON-encoded event list
pub const EVENTS_KEY: &str = "events";
/// Backing-store slot holding the JSON-encoded organizer list
pub const ORGANIZERS_KEY: &str = "organizers";

/// Where a [`Snapshot`] was answered from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Deserialized from the backing store
    Store,
    /// The backing store had no usable entry, the compiled-in dataset was served instead
    Fallback,
}

/// A collection read from an [`EventStore`], tagged with its provenance.
///
/// Seeding writes the exact records the fallback serves, so both sources are supposed
/// to hold identical content and most callers only look at `records`. The tag keeps
/// the degradation observable (and testable) anyway: the two can only diverge when
/// something else writes to the backing store's slots directly.
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    pub records: T,
    pub source: Source,
}

/// Read access to events and organizers, backed by a [`KeyValueStore`], falling back
/// transparently to the compiled-in [`seed`] dataset.
///
/// Reads never fail: a missing key, a storage error or a corrupt entry all degrade to
/// the fallback. Every read fetches and re-parses the whole collection from the backing
/// store, so the answer never diverges from what is actually stored; with the catalogue
/// sizes at hand this costs nothing worth caching away.
///
/// The store is meant to be constructed once by the application assembly and handed to
/// whoever needs it, not kept in a global.
#[derive(Debug)]
pub struct EventStore<S: KeyValueStore> {
    backend: S,
    /// Set once both seed writes have succeeded. Informational: no read consults it
    initialized: AtomicBool,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Create a store over `backend`.
    ///
    /// Nothing is written until [`EventStore::initialize`] runs; reads are correct
    /// either way
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            initialized: AtomicBool::new(false),
        }
    }

    /// Returns the backing store this `EventStore` reads through
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Seed the backing store with the compiled-in dataset, overwriting whatever the
    /// `events` and `organizers` slots currently hold.
    ///
    /// Failures are logged and swallowed: a store that could not be seeded keeps
    /// answering every read from the fallback dataset. Running this again later is
    /// harmless, every write stores the same bytes
    pub async fn initialize(&self) {
        let events_seeded = self.seed_slot(EVENTS_KEY, &*seed::EVENTS).await;
        let organizers_seeded = self.seed_slot(ORGANIZERS_KEY, &*seed::ORGANIZERS).await;
        if events_seeded && organizers_seeded {
            self.initialized.store(true, Ordering::Relaxed);
        }
    }

    /// Whether a call to [`EventStore::initialize`] has fully succeeded yet
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Relaxed)
    }

    /// Returns every event, tagged with where the list came from
    pub async fn load_events(&self) -> Snapshot<Vec<Event>> {
        match self.load_slot(EVENTS_KEY).await {
            Some(records) => Snapshot {
                records,
                source: Source::Store,
            },
            None => Snapshot {
                records: seed::EVENTS.clone(),
                source: Source::Fallback,
            },
        }
    }

    /// Returns every organizer, tagged with where the list came from
    pub async fn load_organizers(&self) -> Snapshot<Vec<Organizer>> {
        match self.load_slot(ORGANIZERS_KEY).await {
            Some(records) => Snapshot {
                records,
                source: Source::Store,
            },
            None => Snapshot {
                records: seed::ORGANIZERS.clone(),
                source: Source::Fallback,
            },
        }
    }

    /// Returns every event of the catalogue
    pub async fn get_all_events(&self) -> Vec<Event> {
        self.load_events().await.records
    }

    /// Returns the event whose id is `id`, or `None` if the catalogue has no such event
    pub async fn get_event_by_id(&self, id: &str) -> Option<Event> {
        self.load_events()
            .await
            .records
            .into_iter()
            .find(|event| event.id() == id)
    }

    /// Returns every event whose category equals `category` exactly (case-sensitive,
    /// no normalization)
    pub async fn get_events_by_category(&self, category: &str) -> Vec<Event> {
        self.load_events()
            .await
            .records
            .into_iter()
            .filter(|event| event.category() == category)
            .collect()
    }

    /// Returns every organizer of the catalogue
    pub async fn get_all_organizers(&self) -> Vec<Organizer> {
        self.load_organizers().await.records
    }

    /// Returns the organizer whose id is `id`, or `None` if the catalogue has no such
    /// organizer
    pub async fn get_organizer_by_id(&self, id: &str) -> Option<Organizer> {
        self.load_organizers()
            .await
            .records
            .into_iter()
            .find(|organizer| organizer.id() == id)
    }

    async fn seed_slot<T: Serialize>(&self, key: &str, records: &[T]) -> bool {
        let json = match serde_json::to_string(records) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Unable to serialize the {:?} seed: {}", key, err);
                return false;
            }
        };
        match self.backend.set(key, json).await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Unable to seed {:?}: {}", key, err);
                false
            }
        }
    }

    /// Fetch and decode one slot. `None` means "serve the fallback", whether the slot
    /// was never seeded, could not be read, or holds something unparsable
    async fn load_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.backend.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => Some(records),
                Err(err) => {
                    log::warn!("Corrupt {:?} entry in the backing store: {}", key, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("Unable to read {:?} from the backing store: {}", key, err);
                None
            }
        }
    }
}
