//! Event organizers

use serde::{Deserialize, Serialize};

use crate::Event;

/// Whoever runs one or more events of the catalogue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    id: String,
    name: String,
    /// URI of the organizer's logo. Stored as-is, not validated
    image: String,
    /// How many events this organizer has run. Maintained by hand in the dataset,
    /// not derived from the events collection
    events: u32,
}

impl Organizer {
    /// Create an organizer record
    pub fn new(id: &str, name: &str, image: &str, events: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            events,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn event_count(&self) -> u32 {
        self.events
    }
}

/// Returns the organizer `event` refers to, if any.
///
/// The lookup compares [`Organizer::id`] with [`Event::organizer`]. Beware: the seed
/// catalogue keeps a display name in `Event::organizer` and numeric strings in
/// `Organizer::id`, so against that data this comes up empty. Whether the reference
/// is meant to be an id or a name is still undecided; callers that want the name
/// interpretation can match on [`Organizer::name`] themselves
pub fn for_event<'a>(organizers: &'a [Organizer], event: &Event) -> Option<&'a Organizer> {
    organizers
        .iter()
        .find(|organizer| organizer.id() == event.organizer())
}
