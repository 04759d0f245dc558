// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The file operation service.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, OwnedMutexGuard};

use diagnostics::{log_debug, log_info};

use crate::error::{Result, StoreError};
use crate::name::FileName;
use crate::ops::{Reply, Request};

/// Text file store rooted at a single flat directory.
///
/// The root is fixed at construction and never changes afterwards. Each
/// operation resolves `<root>/<name>.txt`, takes the per-name lock, and
/// performs one check-then-act sequence against the filesystem. Nothing
/// is cached between calls.
///
/// The locks serialize concurrent invocations on the same name within
/// this process only; access from other processes remains uncoordinated.
pub struct TextStore {
    /// The storage root directory
    root: PathBuf,
    /// storage name -> lock, present only while an operation holds or
    /// waits on it
    locks: std::sync::Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// Holds one name's lock for the duration of a check-then-act sequence.
///
/// Dropping the guard removes the registry entry again once no other
/// caller holds or waits on the same name, so idle names do not
/// accumulate in a long-lived process.
struct NameLockGuard<'a> {
    store: &'a TextStore,
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for NameLockGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut locks = self
            .store
            .locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Strong count 1 means the registry holds the only reference
        let idle = locks
            .get(&self.key)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            locks.remove(&self.key);
        }
    }
}

impl TextStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;

        log_debug!("Opened text store at {root}", root: root.display().to_string());

        Ok(Self {
            root,
            locks: std::sync::Mutex::new(HashMap::new()),
        })
    }

    /// The storage root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Acquire the lock guarding check-then-act sequences for one name.
    async fn lock_name(&self, name: &FileName) -> NameLockGuard<'_> {
        let key = name.storage_name();
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            locks.entry(key.clone()).or_default().clone()
        };

        let guard = lock.lock_owned().await;
        NameLockGuard {
            store: self,
            key,
            guard: Some(guard),
        }
    }

    /// Create a new file with the given content.
    ///
    /// Refuses to touch an existing file: the content on disk is left
    /// unchanged and `AlreadyExists` is returned.
    pub async fn create(&self, name: &FileName, content: &str) -> Result<()> {
        let _guard = self.lock_name(name).await;

        let path = name.resolve(&self.root);
        if tokio::fs::try_exists(&path).await? {
            return Err(StoreError::AlreadyExists(name.clone()));
        }

        tokio::fs::write(&path, content).await?;

        log_info!("Created file {file}", file: name.storage_name());
        Ok(())
    }

    /// Append content to an existing file.
    ///
    /// A separating newline always precedes the appended content, even
    /// when the file is empty. Never creates the file: a missing target
    /// is `NotFound`, with no filesystem mutation.
    pub async fn append(&self, name: &FileName, content: &str) -> Result<()> {
        let _guard = self.lock_name(name).await;

        let path = name.resolve(&self.root);
        if !tokio::fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(name.clone()));
        }

        let mut file = OpenOptions::new().append(true).open(&path).await?;
        file.write_all(b"\n").await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        log_info!("Appended content to {file}", file: name.storage_name());
        Ok(())
    }

    /// Read the complete content of a file, unmodified.
    pub async fn read(&self, name: &FileName) -> Result<String> {
        let _guard = self.lock_name(name).await;

        let path = name.resolve(&self.root);
        if !tokio::fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(name.clone()));
        }

        let content = tokio::fs::read_to_string(&path).await?;

        log_debug!("Read {bytes} bytes from {file}",
            bytes: content.len(),
            file: name.storage_name());
        Ok(content)
    }

    /// Delete a file from storage.
    pub async fn delete(&self, name: &FileName) -> Result<()> {
        let _guard = self.lock_name(name).await;

        let path = name.resolve(&self.root);
        if !tokio::fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(name.clone()));
        }

        tokio::fs::remove_file(&path).await?;

        log_info!("Deleted file {file}", file: name.storage_name());
        Ok(())
    }

    /// Dispatch one request by operation name.
    ///
    /// Validates the logical name, then forwards to the matching
    /// operation and wraps its result in the typed `Reply`.
    pub async fn apply(&self, request: Request) -> Result<Reply> {
        match request {
            Request::CreateFile { filename, content } => {
                let name = FileName::new(&filename)?;
                self.create(&name, &content).await?;
                Ok(Reply::Created(name))
            }
            Request::AppendToFile { filename, content } => {
                let name = FileName::new(&filename)?;
                self.append(&name, &content).await?;
                Ok(Reply::Appended(name))
            }
            Request::ReadFile { filename } => {
                let name = FileName::new(&filename)?;
                let content = self.read(&name).await?;
                Ok(Reply::Content(content))
            }
            Request::DeleteFile { filename } => {
                let name = FileName::new(&filename)?;
                self.delete(&name).await?;
                Ok(Reply::Deleted(name))
            }
        }
    }

    #[cfg(test)]
    fn lock_registry_len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn lock_registry_drains_after_operations() {
        let tmp = tempdir().unwrap();
        let store = TextStore::open(tmp.path()).unwrap();
        let name = FileName::new("notes").unwrap();

        store.create(&name, "hello").await.unwrap();
        store.append(&name, "world").await.unwrap();
        store.read(&name).await.unwrap();
        store.delete(&name).await.unwrap();

        assert_eq!(store.lock_registry_len(), 0);
    }

    #[tokio::test]
    async fn lock_registry_entry_survives_while_held() {
        let tmp = tempdir().unwrap();
        let store = TextStore::open(tmp.path()).unwrap();
        let name = FileName::new("notes").unwrap();

        let guard = store.lock_name(&name).await;
        assert_eq!(store.lock_registry_len(), 1);

        drop(guard);
        assert_eq!(store.lock_registry_len(), 0);
    }
}
