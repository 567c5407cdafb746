//! Occurrence expansion for recurring series.
//!
//! The upstream API returns a single record per recurring series, carrying
//! the whole schedule in `event_times`. The calendar wants one record per
//! scheduled instance, so series records are flattened before indexing.

use crate::event::Event;

/// Expand recurring series records into one event per occurrence.
///
/// A record with a non-empty `event_times` list is replaced by one clone per
/// occurrence, in schedule order, with `id`, `start_time` and `end_time`
/// overwritten from the occurrence and `event_times` cleared. The series
/// record itself is never emitted. Records without occurrences pass through
/// unchanged.
///
/// Output order is the flat concatenation of each input's emissions, in
/// input order; nothing is re-sorted by time.
pub fn expand_occurrences(events: Vec<Event>) -> Vec<Event> {
    let mut expanded = Vec::with_capacity(events.len());

    for event in events {
        match event.event_times.as_deref() {
            Some(times) if !times.is_empty() => {
                for occurrence in times {
                    let mut instance = event.clone();
                    instance.id = occurrence.id.clone();
                    instance.start_time = occurrence.start_time.clone();
                    instance.end_time = occurrence.end_time.clone();
                    instance.event_times = None;
                    expanded.push(instance);
                }
            }
            _ => expanded.push(event),
        }
    }

    expanded
}
