use corkboard::store::{EVENTS_KEY, ORGANIZERS_KEY};
use corkboard::traits::KeyValueStore;
use corkboard::{seed, EventStore, MemoryStore, Source};

#[tokio::test]
async fn reads_are_served_before_any_seeding() {
    let _ = env_logger::builder().is_test(true).try_init();

    // An application may start querying before (or without) seeding. Both collections
    // must come back complete, from the fallback.
    let store = EventStore::new(MemoryStore::new());
    assert!(!store.is_initialized());

    let events = store.load_events().await;
    assert_eq!(events.source, Source::Fallback);
    assert_eq!(events.records, *seed::EVENTS);

    let organizers = store.load_organizers().await;
    assert_eq!(organizers.source, Source::Fallback);
    assert_eq!(organizers.records, *seed::ORGANIZERS);
}

#[tokio::test]
async fn seeding_populates_the_backing_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = EventStore::new(MemoryStore::new());
    store.initialize().await;
    assert!(store.is_initialized());
    assert_eq!(store.backend().len(), 2);

    let events = store.load_events().await;
    assert_eq!(events.source, Source::Store);
    assert_eq!(events.records, *seed::EVENTS);

    let organizers = store.load_organizers().await;
    assert_eq!(organizers.source, Source::Store);
    assert_eq!(organizers.records, *seed::ORGANIZERS);
}

#[tokio::test]
async fn initialize_is_idempotent() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = EventStore::new(MemoryStore::new());
    store.initialize().await;
    let first_events = store.get_all_events().await;
    let first_organizers = store.get_all_organizers().await;

    store.initialize().await;
    assert!(store.is_initialized());
    assert_eq!(store.get_all_events().await, first_events);
    assert_eq!(store.get_all_organizers().await, first_organizers);
}

#[tokio::test]
async fn every_seeded_event_is_found_by_id() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Same answers whether the backing store was seeded or not
    let unseeded = EventStore::new(MemoryStore::new());
    let seeded = EventStore::new(MemoryStore::new());
    seeded.initialize().await;

    for expected in seed::EVENTS.iter() {
        let id = expected.id();
        assert_eq!(unseeded.get_event_by_id(id).await.as_ref(), Some(expected));
        assert_eq!(seeded.get_event_by_id(id).await.as_ref(), Some(expected));
    }
    for expected in seed::ORGANIZERS.iter() {
        let id = expected.id();
        assert_eq!(unseeded.get_organizer_by_id(id).await.as_ref(), Some(expected));
        assert_eq!(seeded.get_organizer_by_id(id).await.as_ref(), Some(expected));
    }
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = EventStore::new(MemoryStore::new());
    store.initialize().await;

    assert_eq!(store.get_event_by_id("99").await, None);
    assert_eq!(store.get_event_by_id("").await, None);
    assert_eq!(store.get_organizer_by_id("99").await, None);
}

#[tokio::test]
async fn the_marathon_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = EventStore::new(MemoryStore::new());
    store.initialize().await;

    let marathon = store.get_event_by_id("3").await.unwrap();
    assert_eq!(marathon.title(), "Marathon d'Ottawa");
    assert_eq!(marathon.location(), "Centre-ville d'Ottawa");
    assert_eq!(marathon.category(), "Sport");

    assert_eq!(store.get_event_by_id("99").await, None);

    let organizers = store.get_all_organizers().await;
    assert_eq!(organizers.len(), 4);
    let ids: Vec<&str> = organizers.iter().map(|organizer| organizer.id()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn categories_match_exactly() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = EventStore::new(MemoryStore::new());
    store.initialize().await;

    let all = store.get_all_events().await;
    let expected: Vec<_> = all
        .iter()
        .filter(|event| event.category() == "Sport")
        .cloned()
        .collect();
    assert!(!expected.is_empty());
    assert_eq!(store.get_events_by_category("Sport").await, expected);

    // No case normalization: the wrong case finds nothing
    assert!(store.get_events_by_category("sport").await.is_empty());
    assert!(store.get_events_by_category("Curling").await.is_empty());
}

#[tokio::test]
async fn stored_json_round_trips_field_by_field() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Feed the store's own serialization back through the backing store by hand,
    // then check nothing was lost in the encode/decode
    let backend = MemoryStore::new();
    backend
        .set(EVENTS_KEY, serde_json::to_string(&*seed::EVENTS).unwrap())
        .await
        .unwrap();
    backend
        .set(ORGANIZERS_KEY, serde_json::to_string(&*seed::ORGANIZERS).unwrap())
        .await
        .unwrap();

    let store = EventStore::new(backend);
    assert_eq!(store.load_events().await.source, Source::Store);
    assert_eq!(store.get_all_events().await, *seed::EVENTS);
    assert_eq!(store.get_all_organizers().await, *seed::ORGANIZERS);

    let festival = store.get_event_by_id("1").await.unwrap();
    assert_eq!(festival.id(), "1");
    assert_eq!(festival.title(), "Festival de musique d'Ottawa");
    assert_eq!(festival.price(), Some("$35"));

    // The free event keeps its null price through the round trip
    let market = store.get_event_by_id("4").await.unwrap();
    assert_eq!(market.price(), None);
}

#[tokio::test]
async fn corrupt_entries_fall_back_to_the_seed() {
    let _ = env_logger::builder().is_test(true).try_init();

    let backend = MemoryStore::new();
    backend.set(EVENTS_KEY, "{not json".to_string()).await.unwrap();
    backend.set(ORGANIZERS_KEY, "42".to_string()).await.unwrap();

    let store = EventStore::new(backend);
    let events = store.load_events().await;
    assert_eq!(events.source, Source::Fallback);
    assert_eq!(events.records, *seed::EVENTS);

    let organizers = store.load_organizers().await;
    assert_eq!(organizers.source, Source::Fallback);
    assert_eq!(organizers.records, *seed::ORGANIZERS);
}

#[tokio::test]
async fn reads_observe_external_changes_to_the_backing_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = EventStore::new(MemoryStore::new());
    store.initialize().await;

    // Nothing is cached in the store itself: an out-of-band write to the slot is
    // visible to the very next read
    let shortened: Vec<_> = seed::EVENTS.iter().take(2).cloned().collect();
    store
        .backend()
        .set(EVENTS_KEY, serde_json::to_string(&shortened).unwrap())
        .await
        .unwrap();

    let events = store.load_events().await;
    assert_eq!(events.source, Source::Store);
    assert_eq!(events.records, shortened);
}

#[cfg(feature = "local_store_mocks")]
mod failing_store {
    use std::sync::{Arc, Mutex};

    use corkboard::mock_behaviour::MockBehaviour;
    use corkboard::{seed, EventStore, MemoryStore, Source};

    #[tokio::test]
    async fn reads_fall_back_when_the_backing_store_fails() {
        let _ = env_logger::builder().is_test(true).try_init();

        let behaviour = Arc::new(Mutex::new(MockBehaviour::fail_now(2)));
        let store = EventStore::new(MemoryStore::with_mock_behaviour(Arc::clone(&behaviour)));

        // Both seed writes get rejected; the store stays usable regardless
        store.initialize().await;
        assert!(!store.is_initialized());

        let events = store.load_events().await;
        assert_eq!(events.source, Source::Fallback);
        assert_eq!(events.records, *seed::EVENTS);

        let marathon = store.get_event_by_id("3").await.unwrap();
        assert_eq!(marathon.location(), "Centre-ville d'Ottawa");
    }

    #[tokio::test]
    async fn a_single_failed_read_does_not_stick() {
        let _ = env_logger::builder().is_test(true).try_init();

        let behaviour = Arc::new(Mutex::new(MockBehaviour::new()));
        let store = EventStore::new(MemoryStore::with_mock_behaviour(Arc::clone(&behaviour)));
        store.initialize().await;
        assert!(store.is_initialized());

        behaviour.lock().unwrap().get_behaviour = (0, 1);
        assert_eq!(store.load_events().await.source, Source::Fallback);

        // The next read goes back to the seeded slot
        assert_eq!(store.load_events().await.source, Source::Store);
    }

    #[tokio::test]
    async fn seeding_can_be_retried_after_a_failure() {
        let _ = env_logger::builder().is_test(true).try_init();

        let behaviour = Arc::new(Mutex::new(MockBehaviour {
            set_behaviour: (0, 2),
            ..MockBehaviour::default()
        }));
        let store = EventStore::new(MemoryStore::with_mock_behaviour(Arc::clone(&behaviour)));

        store.initialize().await;
        assert!(!store.is_initialized());

        store.initialize().await;
        assert!(store.is_initialized());
        assert_eq!(store.load_events().await.source, Source::Store);
    }
}
