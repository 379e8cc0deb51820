//! This crate provides local, offline-first storage for an event catalogue.
//!
//! The catalogue (events and their organizers) ships compiled into the crate, in the [`seed`] module.
//! An [`EventStore`] writes it into a pluggable key-value [backing store](traits::KeyValueStore) and serves
//! every read query from there, falling back to the compiled-in dataset whenever the backing store has no
//! usable entry. \
//! Since seeding and fallback carry the same records, readers always get an answer, before, during or
//! after seeding, and never see an error.
//!
//! Two backing stores are provided: a [`MemoryStore`] keeps entries for the lifetime of the process,
//! a [`FileStore`] mirrors them to a local JSON file.
//!
//! On top of the store, the [`search`] and [`countdown`] modules hold the pure pieces an event-listing
//! front end needs: free-text/category filtering, and a "time left before the event" breakdown.

pub mod traits;

mod event;
pub use event::Event;
pub mod organizer;
pub use organizer::Organizer;
pub mod seed;

pub mod store;
pub use store::{EventStore, Snapshot, Source};

pub mod cache;
pub use cache::FileStore;
pub mod memory;
pub use memory::MemoryStore;

pub mod search;
pub use search::EventFilter;
pub mod countdown;
pub use countdown::Countdown;

pub mod mock_behaviour;
