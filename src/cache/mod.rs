//! In-memory expiring cache for template listings.
//!
//! The cache lives for the process only; nothing is persisted. Every entry
//! shares one expiration interval, and expiration is passive: stale entries
//! read as absent but stay in memory until overwritten.

pub mod entry;
pub mod store;
pub mod validation;

pub use entry::CacheEntry;
pub use store::{Cache, DEFAULT_EXPIRATION_SECS};
pub use validation::{format_duration, parse_ttl};
