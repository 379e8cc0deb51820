//! The compiled-in catalogue.
//!
//! This dataset plays two roles: it is what [`EventStore::initialize`](crate::EventStore::initialize)
//! writes into the backing store, and it is the fallback every read serves when the
//! backing store has no usable entry. Both roles carrying the same records is what
//! makes the seeding race harmless (see the [`store`](crate::store) module).

use once_cell::sync::Lazy;

use crate::{Event, Organizer};

/// Every event the catalogue ships with
pub static EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        Event::new(
            "1",
            "Festival de musique d'Ottawa",
            "https://images.unsplash.com/photo-1533174072545-7a4b6ad7a6c3",
            "2023-06-15",
            "Parc Lansdowne, Ottawa",
            "Un festival de musique en plein air avec des artistes locaux et internationaux.",
            "Musique",
            Some("$35"),
            "Ottawa Events Inc.",
            "2023-06-14T23:59:59",
        ),
        Event::new(
            "2",
            "Exposition d'art contemporain",
            "https://images.unsplash.com/photo-1531058020387-3be344556be6",
            "2023-07-10",
            "Galerie d'art d'Ottawa",
            "Une exposition mettant en vedette des artistes contemporains locaux.",
            "Art",
            Some("$10"),
            "Galerie d'art d'Ottawa",
            "2023-07-09T23:59:59",
        ),
        Event::new(
            "3",
            "Marathon d'Ottawa",
            "https://images.unsplash.com/photo-1530549387789-4c1017266635",
            "2023-08-20",
            "Centre-ville d'Ottawa",
            "Course annuelle de marathon à travers les rues d'Ottawa.",
            "Sport",
            Some("$50"),
            "Run Ottawa",
            "2023-08-15T23:59:59",
        ),
        Event::new(
            "4",
            "Marché fermier du week-end",
            "https://images.unsplash.com/photo-1488459716781-31db52582fe9",
            "2023-05-28",
            "Marché By, Ottawa",
            "Marché de produits frais locaux et d'artisanat.",
            "Marché",
            None,
            "Association des fermiers d'Ottawa",
            "2023-05-28T08:00:00",
        ),
        Event::new(
            "5",
            "Conférence sur la technologie",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87",
            "2023-09-05",
            "Centre des congrès d'Ottawa",
            "Une conférence sur les dernières tendances technologiques.",
            "Technologie",
            Some("$100"),
            "Tech Ottawa",
            "2023-09-01T23:59:59",
        ),
    ]
});

/// Every organizer the catalogue ships with
pub static ORGANIZERS: Lazy<Vec<Organizer>> = Lazy::new(|| {
    vec![
        Organizer::new(
            "1",
            "Ottawa Events Inc.",
            "https://images.unsplash.com/photo-1557804506-669a67965ba0",
            15,
        ),
        Organizer::new(
            "2",
            "Galerie d'art d'Ottawa",
            "https://images.unsplash.com/photo-1516979187457-637abb4f9353",
            8,
        ),
        Organizer::new(
            "3",
            "Run Ottawa",
            "https://images.unsplash.com/photo-1549060279-7e168fcee0c2",
            3,
        ),
        Organizer::new(
            "4",
            "Association des fermiers d'Ottawa",
            "https://images.unsplash.com/photo-1533900298318-6b8da08a523e",
            52,
        ),
    ]
});

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn event_ids_are_unique() {
        let ids: HashSet<&str> = EVENTS.iter().map(|event| event.id()).collect();
        assert_eq!(ids.len(), EVENTS.len());
    }

    #[test]
    fn organizer_ids_are_unique() {
        let ids: HashSet<&str> = ORGANIZERS.iter().map(|organizer| organizer.id()).collect();
        assert_eq!(ids.len(), ORGANIZERS.len());
    }

    #[test]
    fn dataset_has_the_expected_sizes() {
        assert_eq!(EVENTS.len(), 5);
        assert_eq!(ORGANIZERS.len(), 4);
    }
}
