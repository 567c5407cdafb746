//! Wire types for the upstream events API.
//!
//! These are optimistic contracts with an external API that can add or omit
//! fields without notice: everything the transforms do not read is optional,
//! and unknown upstream fields are ignored on decode. Timestamps stay as the
//! strings the API sends; `calendar` interprets them at indexing time.

use serde::{Deserialize, Serialize};

/// A single gathering, or one occurrence of a recurring series after
/// expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique per occurrence once `expand_occurrences` has run.
    pub id: String,
    pub name: String,
    /// Upstream-defined timestamp string (ISO-like).
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attending_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interested_count: Option<u32>,
    /// Schedule of a recurring series. Present only on series records with
    /// more than one scheduled instance; cleared by expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_times: Option<Vec<Occurrence>>,
}

/// One scheduled instance of a recurring series: an alternate identity and
/// time window for the parent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub id: String,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Venue descriptor attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Street-level location, every part individually optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Cover image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cover {
    pub source: String,
}

/// Envelope returned by the upstream API and relayed by the proxy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsResponse {
    /// Missing `data` decodes as no events rather than an error.
    #[serde(default)]
    pub data: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// Pagination cursors. Carried through verbatim, never followed: only the
/// first page is ever consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_event() {
        let json = r#"{"id": "42", "name": "Open Mic", "start_time": "2025-06-05T18:00:00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "42");
        assert_eq!(event.name, "Open Mic");
        assert!(event.event_times.is_none());
        assert!(event.place.is_none());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{
            "id": "42",
            "name": "Open Mic",
            "start_time": "2025-06-05T18:00:00",
            "ticket_uri": "https://example.com/tickets",
            "is_online": false
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "42");
    }

    #[test]
    fn test_decode_envelope_without_data() {
        let resp: EventsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());
        assert!(resp.paging.is_none());
    }

    #[test]
    fn test_encode_skips_absent_fields() {
        let event = Event {
            id: "1".to_string(),
            name: "Market".to_string(),
            start_time: "2025-06-05T09:00:00".to_string(),
            description: None,
            end_time: None,
            place: None,
            cover: None,
            attending_count: None,
            interested_count: None,
            event_times: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(!obj.contains_key("event_times"));
    }
}
