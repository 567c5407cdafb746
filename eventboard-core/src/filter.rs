//! Upcoming/past/range views over event lists.
//!
//! All filters take `now` explicitly so callers and tests control the
//! clock. Events whose `start_time` does not parse are excluded here: a
//! time comparison needs an instant, which the calendar index's sentinel
//! bucket cannot provide.

use chrono::{DateTime, Utc};

use crate::calendar::parse_start_instant;
use crate::event::{Event, Place};

/// Whether an event starts strictly after `now`.
pub fn is_upcoming(start_time: &str, now: DateTime<Utc>) -> bool {
    parse_start_instant(start_time).is_some_and(|start| start > now)
}

/// Events starting after `now`, soonest first.
pub fn upcoming_events(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|e| is_upcoming(&e.start_time, now))
        .cloned()
        .collect();

    upcoming.sort_by_key(|e| parse_start_instant(&e.start_time));
    upcoming
}

/// Events starting at or before `now`, most recent first.
pub fn past_events(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    let mut past: Vec<Event> = events
        .iter()
        .filter(|e| parse_start_instant(&e.start_time).is_some_and(|start| start <= now))
        .cloned()
        .collect();

    past.sort_by(|a, b| {
        parse_start_instant(&b.start_time).cmp(&parse_start_instant(&a.start_time))
    });
    past
}

/// Events starting within `[from, to]`, input order preserved.
pub fn events_in_range(events: &[Event], from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            parse_start_instant(&e.start_time).is_some_and(|start| start >= from && start <= to)
        })
        .cloned()
        .collect()
}

/// Street address of a place, parts joined with ", ". Falls back to the
/// venue name when no street-level location is attached.
pub fn place_address(place: &Place) -> String {
    let Some(location) = &place.location else {
        return place.name.clone().unwrap_or_default();
    };

    let parts: Vec<&str> = [
        location.street.as_deref(),
        location.city.as_deref(),
        location.state.as_deref(),
        location.zip.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    parts.join(", ")
}
