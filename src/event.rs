//! Catalogue events

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A happening from the catalogue (a concert, an exposition, a marathon...).
///
/// Dates are kept as the loosely-ISO-8601 strings they are stored with; use
/// [`Event::starts_at`] and [`Event::deadline_at`] when an actual instant is needed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    title: String,
    /// URI of the poster image. Stored as-is, not validated
    image: String,
    /// The day (or instant) the event takes place
    date: String,
    location: String,
    description: String,
    category: String,
    /// Display price. `None` means the event is free, and serializes to `null`
    price: Option<String>,
    /// Reference to the organizer. The seed catalogue stores a display name here
    /// while [`Organizer::id`](crate::Organizer::id) is a numeric string; see
    /// [`organizer::for_event`](crate::organizer::for_event)
    organizer: String,
    /// Registration cutoff, an ISO-8601 datetime
    deadline: String,
}

impl Event {
    /// Create an event record
    pub fn new(
        id: &str,
        title: &str,
        image: &str,
        date: &str,
        location: &str,
        description: &str,
        category: &str,
        price: Option<&str>,
        organizer: &str,
        deadline: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            image: image.to_string(),
            date: date.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price: price.map(|price| price.to_string()),
            organizer: organizer.to_string(),
            deadline: deadline.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The display price, or `None` for a free event
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    /// The instant the event starts, parsed from its `date` field.
    ///
    /// Accepts either a datetime (`2023-06-15T20:00:00`) or a bare date, which is
    /// taken to mean midnight. Returns `None` when the string parses as neither
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        parse_loose_datetime(&self.date)
    }

    /// The registration cutoff, parsed from its `deadline` field.
    /// Returns `None` when the string is not a valid datetime
    pub fn deadline_at(&self) -> Option<NaiveDateTime> {
        parse_loose_datetime(&self.deadline)
    }
}

fn parse_loose_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)
}
