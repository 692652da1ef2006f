//! S3/MinIO-backed [`ObjectStore`] built on rust-s3.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use tracing::debug;

use crate::core::config::StorageConfig;
use crate::core::error::{TransportError, TransportErrorCode};
use crate::modules::storage::transport::ObjectStore;

/// Object store talking to an S3-compatible service (MinIO, AWS S3, ...).
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
}

impl S3ObjectStore {
    /// Create a store from configuration. Uses path-style URLs so MinIO
    /// endpoints work without per-bucket DNS.
    pub fn new(config: &StorageConfig) -> Result<Self, TransportError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| {
            TransportError::new(
                TransportErrorCode::InvalidArgument,
                format!("Failed to create storage credentials: {}", e),
            )
        })?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region, credentials).map_err(|e| {
            TransportError::new(
                TransportErrorCode::InvalidArgument,
                format!("Failed to create storage bucket handle: {}", e),
            )
        })?;
        bucket.set_path_style();

        Ok(Self { bucket })
    }

    fn failure(&self, op: &str, path: &str, detail: String) -> TransportError {
        TransportError::new(
            classify_failure(&detail),
            format!("{} '{}' on bucket '{}': {}", op, path, self.bucket.name(), detail),
        )
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, path: &str, max_bytes: usize) -> Result<Vec<u8>, TransportError> {
        let response = self
            .bucket
            .get_object(path)
            .await
            .map_err(|e| self.failure("get", path, e.to_string()))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            let body = response.as_str().unwrap_or_default().to_string();
            return Err(self.failure("get", path, format!("HTTP {}: {}", status, body)));
        }

        let data = response.to_vec();
        if data.len() > max_bytes {
            return Err(TransportError::new(
                TransportErrorCode::DownloadSizeExceeded,
                format!(
                    "get '{}': payload of {} bytes exceeds cap of {} bytes",
                    path,
                    data.len(),
                    max_bytes
                ),
            ));
        }

        debug!("Fetched '{}' from bucket '{}'", path, self.bucket.name());
        Ok(data)
    }

    async fn put(&self, path: &str, data: &[u8]) -> Result<(), TransportError> {
        let response = self
            .bucket
            .put_object(path, data)
            .await
            .map_err(|e| self.failure("put", path, e.to_string()))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            let body = response.as_str().unwrap_or_default().to_string();
            return Err(self.failure("put", path, format!("HTTP {}: {}", status, body)));
        }

        debug!("Stored '{}' in bucket '{}'", path, self.bucket.name());
        Ok(())
    }
}

/// Map an S3 failure message onto the transport code vocabulary.
///
/// rust-s3 surfaces server errors as status + XML body text, so this sniffs
/// both. `NoSuchBucket` is checked before the generic 404 case since both
/// arrive with the same status.
fn classify_failure(message: &str) -> TransportErrorCode {
    if message.contains("NoSuchBucket") {
        TransportErrorCode::BucketNotFound
    } else if message.contains("NoSuchKey") || message.contains("404") {
        TransportErrorCode::ObjectNotFound
    } else if message.contains("401")
        || message.contains("InvalidAccessKeyId")
        || message.contains("SignatureDoesNotMatch")
        || message.contains("ExpiredToken")
    {
        TransportErrorCode::Unauthenticated
    } else if message.contains("403") || message.contains("AccessDenied") {
        TransportErrorCode::Unauthorized
    } else if message.contains("SlowDown")
        || message.contains("TooManyRequests")
        || message.contains("503")
    {
        TransportErrorCode::RetryLimitExceeded
    } else if message.contains("QuotaExceeded") {
        TransportErrorCode::QuotaExceeded
    } else {
        TransportErrorCode::Other
    }
}
