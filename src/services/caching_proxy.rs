use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::api::UpstreamClient;
use crate::error::Result;
use crate::models::{CacheEntry, CacheKey, ParameterSet, ResponseCache};
use crate::utils::Clock;

/// Sits in front of [`UpstreamClient`] and serves repeated requests from the
/// shared [`ResponseCache`] while they are younger than the TTL.
#[derive(Clone)]
pub struct CachingProxy {
    client: UpstreamClient,
    cache: Arc<ResponseCache>,
    clock: Arc<dyn Clock>,
    default_ttl: Duration,
}

impl CachingProxy {
    pub fn new(
        client: UpstreamClient,
        cache: Arc<ResponseCache>,
        clock: Arc<dyn Clock>,
        default_ttl: Duration,
    ) -> Self {
        Self {
            client,
            cache,
            clock,
            default_ttl,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Returns the cached response for `(url, params)` if it is fresh,
    /// otherwise fetches, stores and returns a new one. `ttl` falls back to
    /// the configured default.
    ///
    /// Upstream failures are returned as-is and leave the cache untouched.
    pub async fn get_cached(
        &self,
        url: &str,
        params: &ParameterSet,
        ttl: Option<Duration>,
    ) -> Result<Value> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let key = CacheKey::new(url, params);

        if let Some(entry) = self.cache.get(&key) {
            if self.is_fresh(&entry, ttl) {
                debug!("Cache hit for {}", key);
                return Ok(entry.value);
            }
        }

        // The lock is released here; concurrent misses may both fetch.
        debug!("Cache miss for {}", key);
        let value = self.client.fetch(url, params).await?;

        self.cache.insert(
            key,
            CacheEntry {
                value: value.clone(),
                inserted_at: self.clock.now(),
            },
        );

        Ok(value)
    }

    fn is_fresh(&self, entry: &CacheEntry, ttl: Duration) -> bool {
        match (self.clock.now() - entry.inserted_at).to_std() {
            Ok(age) => age < ttl,
            // negative age: the clock stepped back since insertion
            Err(_) => true,
        }
    }
}
