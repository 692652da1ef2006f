//! Client-side storage layer for the Dogbook app.
//!
//! Builds deterministic object paths, performs one-shot async downloads and
//! uploads against an S3-compatible backend, and classifies transport
//! failures into a small, flat error taxonomy. Also carries the app's static
//! icon catalog.
//!
//! ```no_run
//! use dogbook_storage::{
//!     ObjectStorageGateway, S3ObjectStore, StorageConfig, resource_path,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorageConfig::from_env()?;
//! let gateway = ObjectStorageGateway::new(S3ObjectStore::new(&config)?);
//!
//! let location = resource_path("user1", "dog42", Some("portrait"));
//! let image = gateway.download(&location).await?;
//! # let _ = image;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod modules;

pub use crate::core::clock::{Clock, SystemClock};
pub use crate::core::config::StorageConfig;
pub use crate::core::error::{CloudStorageError, Result, TransportError, TransportErrorCode};
pub use crate::modules::icons::Icon;
pub use crate::modules::storage::{
    certificate_path, raw_path, resource_path, resource_path_with, Category, Completion,
    ObjectStorageGateway, ObjectStore, PathKey, S3ObjectStore, StorageLocation,
    MAX_DOWNLOAD_BYTES,
};
