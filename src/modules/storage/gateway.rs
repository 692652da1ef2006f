//! One-shot download/upload against a resolved storage location.

use tracing::{error, info};

use crate::core::error::{CloudStorageError, Result};
use crate::modules::storage::path::StorageLocation;
use crate::modules::storage::transport::ObjectStore;

/// Largest payload a single download may return (1 MiB).
pub const MAX_DOWNLOAD_BYTES: usize = 1024 * 1024;

/// Stateless front over an [`ObjectStore`].
///
/// Each call performs one transfer, classifies any failure into a
/// [`CloudStorageError`], and emits one log record before returning. There is
/// no session, no cache, and no cross-call state.
pub struct ObjectStorageGateway<S> {
    store: S,
}

impl<S: ObjectStore> ObjectStorageGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Download the object at `location` in a single attempt.
    ///
    /// A transfer that reports success with an empty payload fails with
    /// [`CloudStorageError::Unknown`].
    pub async fn download(&self, location: &StorageLocation) -> Result<Vec<u8>> {
        match self.store.get(location.as_str(), MAX_DOWNLOAD_BYTES).await {
            Ok(data) if data.is_empty() => {
                error!("Download of '{}' succeeded without a payload", location);
                Err(CloudStorageError::Unknown)
            }
            Ok(data) => {
                info!("Downloaded '{}' ({} bytes)", location, data.len());
                Ok(data)
            }
            Err(e) => {
                error!("Failed to download '{}': {}", location, e);
                Err(CloudStorageError::classify(e.code))
            }
        }
    }

    /// Upload the whole payload to `location` in a single attempt.
    pub async fn upload(&self, location: &StorageLocation, data: &[u8]) -> Result<()> {
        match self.store.put(location.as_str(), data).await {
            Ok(()) => {
                info!("Uploaded '{}' ({} bytes)", location, data.len());
                Ok(())
            }
            Err(e) => {
                error!("Failed to upload '{}': {}", location, e);
                Err(CloudStorageError::classify(e.code))
            }
        }
    }
}
