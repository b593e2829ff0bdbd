//! Device-local key-value store backed by one file per key.

use listkeeper_core::storage::{KeyValueStore, StorageError, StorageFuture};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores each key as a file named after the key inside a data directory
///
/// Each write goes to its own temporary file in the same directory, which is
/// then renamed over the target. A crash mid-write leaves the previous value
/// intact, and concurrent writes to one key never share a temporary file;
/// the last rename wins.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the stored values
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    // Keys never start with '.', so they cannot collide with temporary files.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

fn write_atomic(root: &Path, path: &Path, value: &[u8]) -> Result<(), StorageError> {
    std::fs::create_dir_all(root)?;

    let mut tmp = NamedTempFile::new_in(root)?;
    tmp.write_all(value)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|error| error.error)?;
    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<String>> {
        Box::pin(async move {
            let path = self.path_for(key)?;
            match tokio::fs::read_to_string(&path).await {
                Ok(value) => Ok(Some(value)),
                Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
                Err(error) => Err(error.into()),
            }
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            let path = self.path_for(key)?;
            let root = self.root.clone();
            let bytes = value.as_bytes().to_vec();

            let target = path.clone();
            tokio::task::spawn_blocking(move || write_atomic(&root, &target, &bytes))
                .await
                .map_err(|error| StorageError::Backend(format!("Write task failed: {error}")))??;

            tracing::trace!(path = %path.display(), bytes = value.len(), "Wrote value");
            Ok(())
        })
    }
}
