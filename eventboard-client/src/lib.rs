//! Data-fetch layer for the eventboard proxy.
//!
//! Wraps the proxy's events endpoint with a typed client, a bounded retry
//! policy (never on 4xx responses) and a staleness-window cache keyed by
//! query parameters. Consumers get data or an error value; nothing here
//! panics on upstream misbehavior.

pub mod cache;
pub mod client;
pub mod error;

pub use cache::{Clock, DEFAULT_STALE_AFTER, QueryCache, SystemClock};
pub use client::{CachedEventsClient, EventsClient};
pub use error::ClientError;
