//! In-memory cache with fixed-interval expiration.

use std::collections::HashMap;

use super::entry::CacheEntry;

/// Default expiration interval in seconds (one day).
pub const DEFAULT_EXPIRATION_SECS: u64 = 86_400;

/// An in-memory key-value cache where entries expire after a fixed interval.
///
/// Expiration is passive: a lookup on a stale key behaves as a miss, but the
/// entry is left in place until a later [`put`](Cache::put) under the same
/// key replaces it. Nothing here spawns cleanup work or touches the map
/// during reads, so `get` borrows `&self`.
///
/// The interval is shared by every entry and fixed for the cache's lifetime.
pub struct Cache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    expiration_secs: u64,
}

impl<V> Cache<V> {
    /// Create an empty cache whose entries expire after `expiration_secs`.
    ///
    /// An interval of 0 effectively disables caching: every entry is stale
    /// by the time the next read observes it.
    pub fn new(expiration_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            expiration_secs,
        }
    }

    /// The configured expiration interval in seconds.
    pub fn expiration_secs(&self) -> u64 {
        self.expiration_secs
    }

    /// Insert or replace the value under `key`, stamped with the current time.
    ///
    /// Always succeeds; any prior entry under the key is discarded.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), CacheEntry::new(value));
    }

    /// Look up a fresh value.
    ///
    /// Returns `None` when the key was never inserted or the entry has
    /// outlived the expiration interval.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Look up a fresh entry, exposing its timestamp alongside the value.
    ///
    /// Same expiration semantics as [`get`](Cache::get).
    pub fn get_entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(self.expiration_secs))
    }

    /// Number of entries held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are held at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn backdate(cache: &mut Cache<&'static str>, key: &str, secs: i64) {
        let entry = cache.entries.get_mut(key).unwrap();
        entry.stored_at = Utc::now() - Duration::seconds(secs);
    }

    #[test]
    fn fresh_value_is_returned() {
        let mut cache = Cache::new(3600);
        cache.put("gitattributes/", "listing");

        assert_eq!(cache.get("gitattributes/"), Some(&"listing"));
    }

    #[test]
    fn missing_key_is_absent() {
        let cache: Cache<&str> = Cache::new(3600);

        assert!(cache.get("never-inserted").is_none());
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut cache = Cache::new(3600);
        cache.put("key", "first");
        cache.put("key", "second");

        assert_eq!(cache.get("key"), Some(&"second"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn expired_entry_is_absent() {
        let mut cache = Cache::new(300);
        cache.put("key", "value");
        backdate(&mut cache, "key", 305);

        assert!(cache.get("key").is_none());
    }

    #[test]
    fn entry_inside_interval_is_fresh() {
        let mut cache = Cache::new(300);
        cache.put("key", "value");
        backdate(&mut cache, "key", 295);

        assert_eq!(cache.get("key"), Some(&"value"));
    }

    #[test]
    fn expired_entry_stays_in_the_map() {
        let mut cache = Cache::new(300);
        cache.put("key", "value");
        backdate(&mut cache, "key", 400);

        assert!(cache.get("key").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn overwrite_revives_expired_key() {
        let mut cache = Cache::new(300);
        cache.put("key", "stale");
        backdate(&mut cache, "key", 400);
        cache.put("key", "fresh");

        assert_eq!(cache.get("key"), Some(&"fresh"));
    }

    #[test]
    fn zero_interval_disables_caching() {
        let mut cache = Cache::new(0);
        cache.put("key", "value");
        backdate(&mut cache, "key", 1);

        assert!(cache.get("key").is_none());
    }

    #[test]
    fn get_entry_exposes_timestamp() {
        let mut cache = Cache::new(3600);
        cache.put("key", "value");

        let entry = cache.get_entry("key").unwrap();
        assert_eq!(entry.value, "value");
        assert!(entry.age().num_seconds() < 1);
    }

    #[test]
    fn get_entry_honors_expiration() {
        let mut cache = Cache::new(300);
        cache.put("key", "value");
        backdate(&mut cache, "key", 400);

        assert!(cache.get_entry("key").is_none());
    }

    #[test]
    fn empty_cache_reports_empty() {
        let cache: Cache<u32> = Cache::new(3600);

        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }
}
