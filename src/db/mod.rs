use serde_json::error::Category;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::models::Subscriptions;

/// Store handle type (Arc-wrapped for sharing across handlers)
pub type Store = Arc<JsonStore>;

/// Subscription store persisted as a single JSON document.
///
/// Every write replaces the whole file. There is no locking, so two
/// concurrent writers race and the last one wins.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

/// Open the JSON store at the given path
///
/// Creates the parent directory if it doesn't exist. The file itself is
/// created on first write.
pub fn open_store(path: impl AsRef<Path>) -> std::io::Result<Store> {
    tracing::info!("Opening subscription store at: {:?}", path.as_ref());

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create store directory: {}", e);
                e
            })?;
        }
    }

    Ok(Arc::new(JsonStore {
        path: path.as_ref().to_path_buf(),
    }))
}

impl JsonStore {
    /// Location of the backing file
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file is present
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Load all subscriptions.
    ///
    /// A missing or unreadable document, or one whose top level is not a JSON
    /// object, is treated as an empty store. Individual records are not
    /// checked.
    pub async fn read(&self) -> Subscriptions {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Store file {:?} not found, using empty store", self.path);
                return Subscriptions::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read store {:?}, using empty store: {}", self.path, e);
                return Subscriptions::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(subscriptions) => subscriptions,
            Err(e) if e.classify() == Category::Data => {
                tracing::warn!(
                    "Store {:?} is JSON but not an object, using empty store: {}",
                    self.path,
                    e
                );
                Subscriptions::new()
            }
            Err(e) => {
                tracing::warn!(
                    "Store {:?} is not valid JSON, using empty store: {}",
                    self.path,
                    e
                );
                Subscriptions::new()
            }
        }
    }

    /// Replace the persisted document with `subscriptions`
    pub async fn write(&self, subscriptions: &Subscriptions) -> Result<()> {
        let payload = serde_json::to_string_pretty(subscriptions)?;
        tokio::fs::write(&self.path, payload).await?;
        Ok(())
    }
}
