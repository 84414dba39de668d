//! Cache entry type.

use chrono::{DateTime, Duration, Utc};

/// A cached value together with the moment it was stored.
///
/// Fields are set once at insertion and never mutated afterwards; replacing
/// a value goes through a fresh [`Cache::put`](super::Cache::put), which
/// swaps in a whole new entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload.
    pub value: V,
    /// When this entry was stored.
    pub stored_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Create a new entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Utc::now(),
        }
    }

    /// Check whether the entry has outlived the given interval.
    ///
    /// Strictly less-than: an entry whose age equals the interval exactly
    /// is still fresh. Callers should not depend on the exact tie.
    /// Intervals too large to represent as a deadline never expire.
    pub fn is_expired(&self, interval_secs: u64) -> bool {
        i64::try_from(interval_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|interval| self.stored_at.checked_add_signed(interval))
            .is_some_and(|deadline| deadline < Utc::now())
    }

    /// Get the age of this entry.
    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.stored_at)
    }
}
