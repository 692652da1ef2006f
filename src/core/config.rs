use std::env;

/// Object storage configuration for the S3/MinIO backend.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage endpoint URL
    pub endpoint: String,
    /// Access key for authentication
    pub access_key: String,
    /// Secret key for authentication
    pub secret_key: String,
    /// Bucket name
    pub bucket: String,
    /// Region name (for S3 compatibility)
    pub region: String,
}

impl StorageConfig {
    const DEFAULT_REGION: &'static str = "us-east-1";

    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        let endpoint =
            env::var("STORAGE_ENDPOINT").map_err(|_| "STORAGE_ENDPOINT must be set".to_string())?;
        let access_key = env::var("STORAGE_ACCESS_KEY")
            .map_err(|_| "STORAGE_ACCESS_KEY must be set".to_string())?;
        let secret_key = env::var("STORAGE_SECRET_KEY")
            .map_err(|_| "STORAGE_SECRET_KEY must be set".to_string())?;
        let bucket =
            env::var("STORAGE_BUCKET").map_err(|_| "STORAGE_BUCKET must be set".to_string())?;
        let region =
            env::var("STORAGE_REGION").unwrap_or_else(|_| Self::DEFAULT_REGION.to_string());

        Ok(Self {
            endpoint,
            access_key,
            secret_key,
            bucket,
            region,
        })
    }
}
