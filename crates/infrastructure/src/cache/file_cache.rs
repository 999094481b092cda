//! File-backed cache store
//!
//! Each entry is a bincode-encoded `(payload, cached_at)` record in
//! `{sanitized key}.entry`. Writes go to a uniquely named temporary file that
//! is then renamed over the entry, so readers see either the old or the new
//! record, never a partial one.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use application::{
    error::CacheError,
    ports::{CacheStore, Clock, SystemClock},
};
use async_trait::async_trait;
use bincode::{Decode, Encode};
use tokio::fs;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{ENTRY_EXTENSION, TEMP_EXTENSION, sanitize_key};

/// Upper bound for a decoded entry; larger claims are treated as corruption
const MAX_ENTRY_BYTES: usize = 64 * 1024 * 1024;

/// On-disk record
#[derive(Debug, Encode, Decode)]
struct CacheEntry {
    payload: Vec<u8>,
    /// Unix epoch milliseconds
    cached_at_ms: i64,
}

/// Persistent cache store rooted at a directory
///
/// All I/O for one key is serialized through a per-key async mutex; different
/// keys never wait on each other.
pub struct FileCacheStore {
    root: PathBuf,
    clock: Arc<dyn Clock>,
    locks: parking_lot::Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl std::fmt::Debug for FileCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCacheStore")
            .field("root", &self.root)
            .field("clock", &self.clock)
            .field("locked_keys", &self.locks.lock().len())
            .finish()
    }
}

impl FileCacheStore {
    /// Open (and create if needed) a cache rooted at `root`
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Self::with_clock(root, Arc::new(SystemClock)).await
    }

    /// Open with an explicit clock
    pub async fn with_clock(
        root: impl Into<PathBuf>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "Opened file cache");
        Ok(Self {
            root,
            clock,
            locks: parking_lot::Mutex::new(HashMap::new()),
        })
    }

    fn entry_path(&self, sanitized: &str) -> PathBuf {
        self.root.join(format!("{sanitized}.{ENTRY_EXTENSION}"))
    }

    fn temp_path(&self, sanitized: &str) -> PathBuf {
        self.root.join(format!(
            "{sanitized}.{ENTRY_EXTENSION}.{}.{TEMP_EXTENSION}",
            Uuid::new_v4()
        ))
    }

    fn lock_for(&self, sanitized: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(sanitized.to_string()).or_default())
    }

    /// Drop lock entries nobody holds or waits on
    fn release_idle_locks(&self) {
        self.locks.lock().retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    fn now_ms(&self) -> i64 {
        self.clock.now().timestamp_millis()
    }

    fn bincode_config() -> impl bincode::config::Config {
        bincode::config::standard().with_limit::<MAX_ENTRY_BYTES>()
    }

    fn encode(entry: &CacheEntry) -> Result<Vec<u8>, CacheError> {
        bincode::encode_to_vec(entry, Self::bincode_config())
            .map_err(|e| CacheError::Encoding(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<CacheEntry, CacheError> {
        let (entry, read) =
            bincode::decode_from_slice::<CacheEntry, _>(bytes, Self::bincode_config())
                .map_err(|e| CacheError::Encoding(e.to_string()))?;
        if read != bytes.len() {
            return Err(CacheError::Encoding(format!(
                "{} trailing bytes after entry",
                bytes.len() - read
            )));
        }
        Ok(entry)
    }

    async fn remove_file_quietly(path: &Path) {
        match fs::remove_file(path).await {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to delete cache file"),
        }
    }

    fn is_cache_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == ENTRY_EXTENSION || ext == TEMP_EXTENSION)
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str, ttl: Duration) -> Option<Vec<u8>> {
        let name = sanitize_key(key);
        let lock = self.lock_for(&name);
        let _guard = lock.lock().await;
        let path = self.entry_path(&name);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache miss");
                return None;
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read cache entry");
                return None;
            },
        };

        let entry = match Self::decode(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding corrupt cache entry");
                Self::remove_file_quietly(&path).await;
                return None;
            },
        };

        let age_ms = self.now_ms().saturating_sub(entry.cached_at_ms);
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        if age_ms < ttl_ms {
            debug!(age_ms, "Cache hit");
            Some(entry.payload)
        } else {
            debug!(age_ms, ttl_ms, "Cache entry expired");
            Self::remove_file_quietly(&path).await;
            None
        }
    }

    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    async fn set(&self, key: &str, payload: Vec<u8>) -> Result<(), CacheError> {
        let name = sanitize_key(key);
        let bytes = Self::encode(&CacheEntry {
            payload,
            cached_at_ms: self.now_ms(),
        })?;

        let lock = self.lock_for(&name);
        let _guard = lock.lock().await;

        fs::create_dir_all(&self.root).await?;
        let temp = self.temp_path(&name);
        fs::write(&temp, &bytes).await?;
        if let Err(e) = fs::rename(&temp, self.entry_path(&name)).await {
            Self::remove_file_quietly(&temp).await;
            return Err(e.into());
        }
        debug!("Cache entry written");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        let name = sanitize_key(key);
        let outcome = {
            let lock = self.lock_for(&name);
            let _guard = lock.lock().await;
            match fs::remove_file(self.entry_path(&name)).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        };
        self.release_idle_locks();
        outcome
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn clear_all(&self) -> Result<(), CacheError> {
        let mut removed = 0usize;
        match fs::read_dir(&self.root).await {
            Ok(mut entries) => {
                while let Some(entry) = entries.next_entry().await? {
                    let path = entry.path();
                    if Self::is_cache_file(&path) {
                        match fs::remove_file(&path).await {
                            Ok(()) => removed += 1,
                            Err(e) if e.kind() == ErrorKind::NotFound => {},
                            Err(e) => return Err(e.into()),
                        }
                    }
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => return Err(e.into()),
        }
        fs::create_dir_all(&self.root).await?;
        self.release_idle_locks();
        debug!(removed, "Cache cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::ports::ManualClock;
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    const HOUR: Duration = Duration::from_secs(60 * 60);

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_760_600_000, 0).unwrap()
    }

    async fn store_with_clock() -> (TempDir, Arc<ManualClock>, FileCacheStore) {
        let dir = TempDir::new().unwrap();
        let clock = Arc::new(ManualClock::new(start()));
        let store = FileCacheStore::with_clock(dir.path(), clock.clone())
            .await
            .unwrap();
        (dir, clock, store)
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn round_trip_within_ttl() {
        let (_dir, _clock, store) = store_with_clock().await;
        store.set("news-zurich-en", b"payload".to_vec()).await.unwrap();
        assert_eq!(
            store.get("news-zurich-en", HOUR).await,
            Some(b"payload".to_vec())
        );
    }

    #[tokio::test]
    async fn entry_is_fresh_just_before_ttl() {
        let (_dir, clock, store) = store_with_clock().await;
        store.set("k", b"v".to_vec()).await.unwrap();
        clock.advance(HOUR - Duration::from_millis(1));
        assert!(store.get("k", HOUR).await.is_some());
    }

    #[tokio::test]
    async fn entry_is_absent_and_deleted_at_ttl() {
        let (dir, clock, store) = store_with_clock().await;
        store.set("k", b"v".to_vec()).await.unwrap();
        clock.advance(HOUR);

        assert!(store.get("k", HOUR).await.is_none());
        assert!(file_names(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn zero_ttl_is_always_stale() {
        let (_dir, _clock, store) = store_with_clock().await;
        store.set("k", b"v".to_vec()).await.unwrap();
        assert!(store.get("k", Duration::ZERO).await.is_none());
    }

    #[tokio::test]
    async fn corrupt_entry_is_absent_and_deleted() {
        let (dir, _clock, store) = store_with_clock().await;
        std::fs::write(dir.path().join("k.entry"), b"\xff\xff\xff garbage").unwrap();

        assert!(store.get("k", HOUR).await.is_none());
        assert!(!dir.path().join("k.entry").exists());
    }

    #[tokio::test]
    async fn overwrite_replaces_payload_and_leaves_no_temp_files() {
        let (dir, _clock, store) = store_with_clock().await;
        store.set("lunch-bern", b"old".to_vec()).await.unwrap();
        store.set("lunch-bern", b"new".to_vec()).await.unwrap();

        assert_eq!(store.get("lunch-bern", HOUR).await, Some(b"new".to_vec()));
        assert_eq!(file_names(dir.path()), vec!["lunch-bern.entry".to_string()]);
    }

    #[tokio::test]
    async fn file_names_are_sanitized() {
        let (dir, _clock, store) = store_with_clock().await;
        store.set("Weird/Key", b"v".to_vec()).await.unwrap();
        assert_eq!(
            file_names(dir.path()),
            vec!["%57eird%2F%4Bey.entry".to_string()]
        );
    }

    #[tokio::test]
    async fn remove_missing_key_is_noop() {
        let (_dir, _clock, store) = store_with_clock().await;
        tokio_test::assert_ok!(store.remove("never-written").await);
        store.set("k", b"v".to_vec()).await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.get("k", HOUR).await.is_none());
    }

    #[tokio::test]
    async fn clear_all_is_idempotent_and_store_stays_usable() {
        let (dir, _clock, store) = store_with_clock().await;
        store.set("a", b"1".to_vec()).await.unwrap();
        store.set("b", b"2".to_vec()).await.unwrap();

        store.clear_all().await.unwrap();
        store.clear_all().await.unwrap();
        assert!(store.get("a", HOUR).await.is_none());
        assert!(file_names(dir.path()).is_empty());

        store.set("c", b"3".to_vec()).await.unwrap();
        assert_eq!(store.get("c", HOUR).await, Some(b"3".to_vec()));
    }

    #[tokio::test]
    async fn clear_all_recreates_missing_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("cache");
        let store = FileCacheStore::open(&root).await.unwrap();
        std::fs::remove_dir_all(&root).unwrap();

        store.clear_all().await.unwrap();
        assert!(root.is_dir());
        store.set("k", b"v".to_vec()).await.unwrap();
    }

    #[tokio::test]
    async fn clear_all_leaves_foreign_files() {
        let (dir, _clock, store) = store_with_clock().await;
        std::fs::write(dir.path().join("notes.txt"), b"keep").unwrap();
        store.set("a", b"1".to_vec()).await.unwrap();

        store.clear_all().await.unwrap();
        assert_eq!(file_names(dir.path()), vec!["notes.txt".to_string()]);
    }

    #[tokio::test]
    async fn idle_locks_are_released() {
        let (_dir, _clock, store) = store_with_clock().await;
        store.set("a", b"1".to_vec()).await.unwrap();
        store.remove("a").await.unwrap();
        assert!(store.locks.lock().is_empty());

        store.set("b", b"2".to_vec()).await.unwrap();
        store.set("c", b"3".to_vec()).await.unwrap();
        assert_eq!(store.locks.lock().len(), 2);
        store.clear_all().await.unwrap();
        assert!(store.locks.lock().is_empty());
    }

    #[tokio::test]
    async fn concurrent_writers_leave_one_complete_entry() {
        let (_dir, _clock, store) = store_with_clock().await;
        let store = Arc::new(store);

        let writers: Vec<_> = (0u8..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.set("shared", vec![i; 1024]).await })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        let payload = store.get("shared", HOUR).await.unwrap();
        assert_eq!(payload.len(), 1024);
        assert!(payload.iter().all(|b| *b == payload[0]));
    }
}
