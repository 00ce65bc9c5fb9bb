use async_trait::async_trait;
use pardot_embed_application::ports::CacheStore;
use pardot_embed_domain::DomainError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};
use tracing::{debug, instrument};

/// Distinguishes temp files of concurrent saves within one process.
static TEMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Directory-backed store: one file per key. A file whose modification time
/// is older than `lifetime` reads as absent.
pub struct FileCacheStore {
    directory: PathBuf,
    lifetime: Duration,
}

impl FileCacheStore {
    pub fn new(directory: impl AsRef<Path>, lifetime: Duration) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            lifetime,
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.directory.join(format!("{file_name}.cache"))
    }

    fn is_expired(&self, modified: SystemTime) -> bool {
        match SystemTime::now().duration_since(modified) {
            Ok(age) => age >= self.lifetime,
            // mtime in the future: treat as fresh
            Err(_) => false,
        }
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let path = self.entry_path(key);

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::CacheStoreError(format!(
                    "failed to stat {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let modified = metadata.modified().map_err(|e| {
            DomainError::CacheStoreError(format!("no mtime for {}: {}", path.display(), e))
        })?;
        if self.is_expired(modified) {
            debug!(path = %path.display(), "Cache file expired");
            return Ok(None);
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::CacheStoreError(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn save(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| {
                DomainError::CacheStoreError(format!(
                    "failed to create {}: {}",
                    self.directory.display(),
                    e
                ))
            })?;

        let path = self.entry_path(key);
        let tmp_path = path.with_extension(format!(
            "cache.{}.{}.tmp",
            std::process::id(),
            TEMP_SEQUENCE.fetch_add(1, Ordering::Relaxed)
        ));

        tokio::fs::write(&tmp_path, &value).await.map_err(|e| {
            DomainError::CacheStoreError(format!("failed to write {}: {}", tmp_path.display(), e))
        })?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(DomainError::CacheStoreError(format!(
                "failed to replace {}: {}",
                path.display(),
                e
            )));
        }

        debug!(path = %path.display(), "Cache file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::new(dir.path(), Duration::from_secs(60));
        assert_eq!(store.load("serialized_forms").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_creates_directory_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("cache");
        let store = FileCacheStore::new(&nested, Duration::from_secs(60));

        store.save("serialized_forms", b"[1]".to_vec()).await.unwrap();

        assert!(nested.join("serialized_forms.cache").exists());
        let leftovers = std::fs::read_dir(&nested)
            .unwrap()
            .filter(|entry| {
                entry
                    .as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
        assert_eq!(
            store.load("serialized_forms").await.unwrap(),
            Some(b"[1]".to_vec())
        );
    }

    #[tokio::test]
    async fn test_keys_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::new(dir.path(), Duration::from_secs(60));

        store.save("../escape", b"x".to_vec()).await.unwrap();

        assert!(dir.path().join("___escape.cache").exists());
        assert_eq!(store.load("../escape").await.unwrap(), Some(b"x".to_vec()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_to_same_key_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(FileCacheStore::new(dir.path(), Duration::from_secs(60)));
        let payload = vec![b'x'; 1 << 20];

        for _ in 0..5 {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = store.clone();
                    let payload = payload.clone();
                    tokio::spawn(async move { store.save("serialized_forms", payload).await })
                })
                .collect();

            for handle in handles {
                assert!(handle.await.unwrap().is_ok());
            }

            assert_eq!(
                store.load("serialized_forms").await.unwrap(),
                Some(payload.clone())
            );
        }

        let files = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 1);
    }

    #[tokio::test]
    async fn test_expired_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::new(dir.path(), Duration::from_millis(20));
        store.save("k", b"v".to_vec()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(store.load("k").await.unwrap(), None);
    }
}
