use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use super::params::ParameterSet;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub inserted_at: DateTime<Utc>,
}

/// Identity of an upstream request: resource URL plus its parameters.
///
/// Parameters are held in key order, so `{a:1,b:2}` and `{b:2,a:1}` give the
/// same key. An empty parameter set is the same as none at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    url: String,
    params: ParameterSet,
}

impl CacheKey {
    pub fn new(url: &str, params: &ParameterSet) -> Self {
        Self {
            url: url.to_string(),
            params: params.clone(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            f.write_str(&self.url)
        } else {
            write!(f, "{}?{}", self.url, self.params)
        }
    }
}

/// In-memory response store shared by every request for the life of the
/// process. Entries are replaced, never removed.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    /// Stores `entry`, overwriting whatever was there for `key`.
    pub fn insert(&self, key: CacheKey, entry: CacheEntry) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
