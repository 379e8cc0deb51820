//! Client-side filtering of the event list

use crate::Event;

/// The categories the compiled-in catalogue uses, in display order
pub const CATEGORIES: [&str; 5] = ["Musique", "Art", "Sport", "Marché", "Technologie"];

/// A filter over a list of events, combining an optional free-text search with an
/// optional category.
///
/// The text criterion matches when the title or the description contains the query,
/// ignoring case. The category criterion is an exact, case-sensitive comparison, the
/// same one [`EventStore::get_events_by_category`](crate::EventStore::get_events_by_category)
/// performs. An empty filter keeps everything.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    text: Option<String>,
    category: Option<String>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only events whose title or description contains `text`
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Keep only events of exactly this category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Whether `event` passes every criterion of this filter
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            if !event.title().to_lowercase().contains(&needle)
                && !event.description().to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if event.category() != category {
                return false;
            }
        }

        true
    }

    /// Apply this filter to `events`, keeping the original order
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events
            .iter()
            .filter(|event| self.matches(event))
            .cloned()
            .collect()
    }
}
