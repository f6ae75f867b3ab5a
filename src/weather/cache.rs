use super::types::WeatherPayload;
use chrono::{DateTime, Duration, Utc};
use moka::future::Cache;

/// Freshness window for cached payloads, in minutes.
pub const CACHE_TTL_MINUTES: i64 = 10;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub normalized_city: String,
    pub payload: WeatherPayload,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < Duration::minutes(CACHE_TTL_MINUTES)
    }
}

pub fn normalize_key(city: &str) -> String {
    city.to_lowercase()
}

/// In-memory city cache.
///
/// Entries are never evicted by age here; stale entries stay until the next
/// successful fetch overwrites them. Callers check [`CacheEntry::is_fresh`].
#[derive(Clone)]
pub struct WeatherCache {
    entries: Cache<String, CacheEntry>,
}

impl WeatherCache {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    pub async fn lookup(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).await
    }

    pub async fn store(&self, key: String, payload: WeatherPayload, fetched_at: DateTime<Utc>) {
        let entry = CacheEntry {
            normalized_city: key.clone(),
            payload,
            fetched_at,
        };
        self.entries.insert(key, entry).await;
    }

    #[cfg(test)]
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

impl Default for WeatherCache {
    fn default() -> Self {
        Self::new()
    }
}
