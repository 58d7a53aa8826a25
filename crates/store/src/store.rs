//! The JSON-file-backed document store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::document::Document;
use crate::error::StoreError;

/// Handle to the persisted document.
///
/// Cheap to clone; all clones share one in-memory copy of the document
/// behind an async mutex, so writes are serialized. Every mutation is
/// flushed to disk before the lock is released.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    document: Mutex<Document>,
}

impl Store {
    /// Opens the store at `path`, loading the existing document or starting
    /// from an empty one when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the file exists but cannot be read or
    /// parsed, or when parent directories cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let document = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "store file not found, starting empty");
                Document::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            inner: Arc::new(Inner {
                path,
                document: Mutex::new(document),
            }),
        })
    }

    /// Reads from the document under the lock.
    pub(crate) async fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> T {
        let doc = self.inner.document.lock().await;
        f(&doc)
    }

    /// Mutates the document under the lock and flushes it to disk.
    ///
    /// When the closure returns an error the document is left untouched and
    /// nothing is written.
    pub(crate) async fn update<T>(
        &self,
        f: impl FnOnce(&mut Document) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut doc = self.inner.document.lock().await;
        let mut staged = doc.clone();
        let out = f(&mut staged)?;
        self.flush(&staged).await?;
        *doc = staged;
        Ok(out)
    }

    /// Writes the document atomically: temp file in the same directory,
    /// then rename over the target.
    async fn flush(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.inner.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.inner.path).await?;
        debug!(path = %self.inner.path.display(), bytes = bytes.len(), "store flushed");
        Ok(())
    }
}
