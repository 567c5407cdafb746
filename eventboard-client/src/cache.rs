//! Staleness-window cache for events queries.
//!
//! One entry per query parameter combination. An entry older than the
//! configured window stops being served; the caller refetches and replaces
//! it. The clock is injected so tests can drive expiry without sleeping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use eventboard_core::{EventsQuery, EventsResponse};

/// Default staleness window: responses are reused for an hour.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(60 * 60);

/// Source of monotonic time for cache-entry aging.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    fetched_at: Instant,
    response: EventsResponse,
}

/// Cache of events responses keyed by query parameters.
pub struct QueryCache {
    stale_after: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self::with_clock(stale_after, Arc::new(SystemClock))
    }

    /// Construct with an explicit clock (tests pass a fake one).
    pub fn with_clock(stale_after: Duration, clock: Arc<dyn Clock>) -> Self {
        QueryCache {
            stale_after,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The cached response for this query, unless it has gone stale.
    pub fn get(&self, query: &EventsQuery) -> Option<EventsResponse> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(&query.cache_key())?;

        if self.clock.now().duration_since(entry.fetched_at) < self.stale_after {
            Some(entry.response.clone())
        } else {
            None
        }
    }

    /// Store a fresh response for this query, replacing any previous entry.
    pub fn put(&self, query: &EventsQuery, response: EventsResponse) {
        let entry = CacheEntry {
            fetched_at: self.clock.now(),
            response,
        };
        self.entries.lock().unwrap().insert(query.cache_key(), entry);
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER)
    }
}


#[cfg(test)]
mod tests {
    use super::test_clock::FakeClock;
    use super::*;
    use eventboard_core::Event;

    fn response(id: &str) -> EventsResponse {
        EventsResponse {
            data: vec![Event {
                id: id.to_string(),
                name: "Cached Event".to_string(),
                start_time: "2025-06-05T18:00:00".to_string(),
                description: None,
                end_time: None,
                place: None,
                cover: None,
                attending_count: None,
                interested_count: None,
                event_times: None,
            }],
            paging: None,
        }
    }

    #[test]
    fn test_hit_within_window() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let query = EventsQuery::default();

        assert!(cache.get(&query).is_none());
        cache.put(&query, response("1"));

        let hit = cache.get(&query).unwrap();
        assert_eq!(hit.data[0].id, "1");
    }

    #[test]
    fn test_entries_keyed_by_query() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let jan = EventsQuery {
            since: Some("2025-01-01".to_string()),
            ..Default::default()
        };
        let feb = EventsQuery {
            since: Some("2025-02-01".to_string()),
            ..Default::default()
        };

        cache.put(&jan, response("jan"));
        assert!(cache.get(&feb).is_none());
        assert_eq!(cache.get(&jan).unwrap().data[0].id, "jan");
    }

    #[test]
    fn test_entry_expires_after_window() {
        let clock = Arc::new(FakeClock::new());
        let cache = QueryCache::with_clock(Duration::from_secs(3600), clock.clone());
        let query = EventsQuery::default();

        cache.put(&query, response("1"));
        clock.advance(Duration::from_secs(3599));
        assert!(cache.get(&query).is_some());

        clock.advance(Duration::from_secs(2));
        assert!(cache.get(&query).is_none());
    }

    #[test]
    fn test_put_replaces_stale_entry() {
        let clock = Arc::new(FakeClock::new());
        let cache = QueryCache::with_clock(Duration::from_secs(10), clock.clone());
        let query = EventsQuery::default();

        cache.put(&query, response("old"));
        clock.advance(Duration::from_secs(20));
        cache.put(&query, response("new"));

        assert_eq!(cache.get(&query).unwrap().data[0].id, "new");
    }
}
