//! Cache port definition
//!
//! Persistent, TTL-scoped storage of the latest response per cache key.
//! Values are stored as raw bytes; callers handle serialization.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::error::CacheError;

/// Cache port for storing and retrieving cached responses
///
/// Freshness is evaluated on read: an entry is returned only while its age is
/// strictly below `ttl`. Stale and unreadable entries are reported as absent.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Payload for `key` if present, decodable and younger than `ttl`
    async fn get(&self, key: &str, ttl: Duration) -> Option<Vec<u8>>;

    /// Store `payload` under `key`, stamped with the current time
    async fn set(&self, key: &str, payload: Vec<u8>) -> Result<(), CacheError>;

    /// Delete one entry; a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), CacheError>;

    /// Delete every entry, leaving the store usable
    async fn clear_all(&self) -> Result<(), CacheError>;
}

/// Extension trait for typed cache operations
///
/// Provides JSON get/set on top of the raw byte interface.
#[async_trait]
pub trait CacheStoreExt: CacheStore {
    /// Get a typed value; an entry that fails to decode counts as a miss
    async fn get_json<T>(&self, key: &str, ttl: Duration) -> Option<T>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        let bytes = self.get(key, ttl).await?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key = %key, error = %e, "Cached payload no longer matches schema");
                None
            },
        }
    }

    /// Set a typed value
    async fn set_json<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let bytes = serde_json::to_vec(value).map_err(|e| CacheError::Encoding(e.to_string()))?;
        self.set(key, bytes).await
    }
}

// Blanket implementation for all CacheStore implementors
impl<T: CacheStore + ?Sized> CacheStoreExt for T {}
