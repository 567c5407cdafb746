//! Date-keyed calendar index over expanded events.
//!
//! The rendering shell draws one cell per calendar day and needs an O(1)
//! answer to "which events fall on this date". The index groups events by
//! the date portion of `start_time` under a fixed `YYYY-MM-DD` key; lookups
//! format the queried date with the same key and an absent key means an
//! empty cell.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::event::Event;

/// Key format for calendar buckets and lookups.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Bucket key for events whose `start_time` does not parse.
///
/// No real calendar date formats to this key, so such events never surface
/// in a day cell, but they stay accounted for in the index.
pub const INVALID_DATE_KEY: &str = "invalid";

/// Parse an upstream timestamp into the calendar date as written.
///
/// Accepts RFC 3339, Graph-style offsets without a colon (`+0000`), naive
/// datetimes and bare dates. For offset timestamps the date is taken in the
/// timestamp's own offset, not converted to UTC.
pub fn parse_start_date(start_time: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(start_time) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(start_time, DATE_KEY_FORMAT).ok()
}

/// Parse an upstream timestamp into an instant for time comparisons.
/// Naive timestamps and bare dates are taken as UTC.
pub fn parse_start_instant(start_time: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(start_time) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(start_time, DATE_KEY_FORMAT)
        .ok()
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap().and_utc())
}

/// Derive the bucket key for an event timestamp.
pub fn date_key(start_time: &str) -> String {
    match parse_start_date(start_time) {
        Some(date) => date.format(DATE_KEY_FORMAT).to_string(),
        None => INVALID_DATE_KEY.to_string(),
    }
}

/// Mapping from calendar date to the events falling on it.
///
/// Derived, never persisted: rebuild from the expanded event list whenever
/// the source changes. Buckets keep insertion order; callers wanting
/// chronological order within a day sort the input first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarIndex {
    buckets: HashMap<String, Vec<Event>>,
}

impl CalendarIndex {
    /// Build an index from an already-expanded event list.
    pub fn build(events: &[Event]) -> Self {
        let mut buckets: HashMap<String, Vec<Event>> = HashMap::new();

        for event in events {
            buckets
                .entry(date_key(&event.start_time))
                .or_default()
                .push(event.clone());
        }

        CalendarIndex { buckets }
    }

    /// Events on the given calendar date, in bucket order.
    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.events_on_key(&date.format(DATE_KEY_FORMAT).to_string())
    }

    /// Events under a raw bucket key.
    pub fn events_on_key(&self, key: &str) -> &[Event] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All bucket keys holding at least one event.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Number of indexed events across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Occurrence;
    use crate::expand::expand_occurrences;

    fn event(id: &str, start: &str) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {id}"),
            start_time: start.to_string(),
            description: None,
            end_time: None,
            place: None,
            cover: None,
            attending_count: None,
            interested_count: None,
            event_times: None,
        }
    }

    #[test]
    fn test_date_key_formats() {
        assert_eq!(date_key("2025-06-05T18:00:00"), "2025-06-05");
        assert_eq!(date_key("2025-06-05T18:00:00+0000"), "2025-06-05");
        assert_eq!(date_key("2025-06-05T18:00:00+02:00"), "2025-06-05");
        assert_eq!(date_key("2025-06-05T18:00:00Z"), "2025-06-05");
        assert_eq!(date_key("2025-06-05"), "2025-06-05");
    }

    #[test]
    fn test_date_key_uses_date_as_written_not_utc() {
        // 01:00 at +0300 is the previous day in UTC; the cell shown to the
        // visitor is the one printed in the timestamp
        assert_eq!(date_key("2025-06-05T01:00:00+0300"), "2025-06-05");
    }

    #[test]
    fn test_unparseable_start_time_buckets_under_sentinel() {
        assert_eq!(date_key("next thursday-ish"), INVALID_DATE_KEY);

        let index = CalendarIndex::build(&[event("1", "not a timestamp")]);
        assert_eq!(index.events_on_key(INVALID_DATE_KEY).len(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_same_day_different_times_share_a_bucket() {
        let events = vec![
            event("1", "2025-06-05T09:00:00"),
            event("2", "2025-06-06T12:00:00"),
            event("3", "2025-06-05T18:00:00"),
        ];

        let index = CalendarIndex::build(&events);
        let day = index.events_on(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());

        // Grouped by date only, insertion order preserved
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].id, "1");
        assert_eq!(day[1].id, "3");
    }

    #[test]
    fn test_lookup_on_empty_day() {
        let index = CalendarIndex::build(&[event("1", "2025-06-05T09:00:00")]);
        let empty = index.events_on(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let events = vec![
            event("1", "2025-06-05T09:00:00"),
            event("2", "2025-06-05T18:00:00"),
            event("3", "2025-07-01T10:00:00"),
        ];

        assert_eq!(CalendarIndex::build(&events), CalendarIndex::build(&events));
    }

    #[test]
    fn test_empty_input_yields_empty_index() {
        let index = CalendarIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_expand_then_index_end_to_end() {
        let events = vec![Event {
            event_times: Some(vec![
                Occurrence {
                    id: "1a".to_string(),
                    start_time: "2025-06-05T18:00:00".to_string(),
                    end_time: Some("2025-06-05T20:00:00".to_string()),
                },
                Occurrence {
                    id: "1b".to_string(),
                    start_time: "2025-06-19T18:00:00".to_string(),
                    end_time: Some("2025-06-19T20:00:00".to_string()),
                },
            ]),
            ..event("1", "2025-06-05T18:00:00")
        }];

        let expanded = expand_occurrences(events);
        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].id, "1a");
        assert_eq!(expanded[1].id, "1b");

        let index = CalendarIndex::build(&expanded);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.events_on(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()).len(),
            1
        );
        assert_eq!(
            index.events_on(NaiveDate::from_ymd_opt(2025, 6, 19).unwrap()).len(),
            1
        );
    }
}
