//! Object storage: path construction, the transport seam, the gateway, and
//! the S3-backed transport.

mod gateway;
mod path;
mod s3;
mod transport;

pub use gateway::{ObjectStorageGateway, MAX_DOWNLOAD_BYTES};
pub use path::{
    certificate_path, raw_path, resource_path, resource_path_with, Category, PathKey,
    StorageLocation,
};
pub use s3::S3ObjectStore;
pub use transport::{Completion, ObjectStore};
