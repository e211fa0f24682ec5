//! Community events.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;

/// A community event as served by `/api/events`.
///
/// `slug` is unique within the collection and is the only key exposed for
/// lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// Source-specific identifier.
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub id: String,
    /// URL-safe unique key.
    #[serde(deserialize_with = "lenient::null_default")]
    pub slug: String,
    /// Display name.
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    /// Event date as authored (usually `YYYY-MM-DD`).
    #[serde(deserialize_with = "lenient::null_default")]
    pub date: String,
    /// Start time as authored.
    #[serde(deserialize_with = "lenient::null_default")]
    pub start_time: String,
    /// End time as authored.
    #[serde(deserialize_with = "lenient::null_default")]
    pub end_time: String,
    /// Venue name.
    #[serde(deserialize_with = "lenient::null_default")]
    pub location: String,
    /// Venue street address.
    #[serde(deserialize_with = "lenient::null_default")]
    pub location_address: String,
    /// Link to a map of the venue.
    #[serde(deserialize_with = "lenient::null_default")]
    pub location_map_url: String,
    /// Card image URL; empty means "use a placeholder".
    #[serde(deserialize_with = "lenient::null_default")]
    pub image: String,
    /// Detail page banner URL.
    #[serde(deserialize_with = "lenient::null_default")]
    pub banner_image: String,
    /// One-line teaser.
    #[serde(deserialize_with = "lenient::null_default")]
    pub short_description: String,
    /// Full description as plain text.
    #[serde(deserialize_with = "lenient::null_default")]
    pub description: String,
    /// Host display name.
    #[serde(deserialize_with = "lenient::null_default")]
    pub host: String,
    /// Host title or role.
    #[serde(deserialize_with = "lenient::null_default")]
    pub host_title: String,
    /// Host portrait URL.
    #[serde(deserialize_with = "lenient::null_default")]
    pub host_image: String,
    /// Ticket price as authored (`"25"`, `"Free"`).
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub ticket_price: String,
    /// External ticketing link.
    #[serde(deserialize_with = "lenient::null_default")]
    pub ticket_link: String,
    /// Whether the event already happened.
    #[serde(deserialize_with = "lenient::null_default")]
    pub is_past: bool,
}

/// Response envelope for `GET /api/events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EventsEnvelope {
    /// Events, newest first.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub events: Vec<Event>,
}

/// Parses the date formats fixture editors and the CMS produce.
///
/// Accepts `2024-06-15`, RFC 3339 timestamps and `June 15, 2024`.
#[must_use]
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(ts);
    }
    NaiveDate::parse_from_str(raw, "%B %d, %Y")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Orders events newest first. Events whose date does not parse keep their
/// relative order and go after the dated ones.
pub fn sort_newest_first(events: &mut [Event]) {
    events.sort_by_cached_key(|e| {
        let date = parse_event_date(&e.date);
        (date.is_none(), std::cmp::Reverse(date))
    });
}
