use thiserror::Error;

/// Failure kinds surfaced to callers of the storage gateway.
///
/// Deliberately flat: no wrapped source error. Diagnostic detail is logged at
/// the call site before the kind is returned, so the caller only ever sees
/// the classification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CloudStorageError {
    #[error("object not found")]
    NotFound,

    #[error("transfer limit exceeded")]
    LimitExceeded,

    #[error("unauthorized")]
    Unauthorized,

    #[error("unknown storage error")]
    Unknown,
}

/// Failure codes reported by the underlying storage transport.
///
/// This is the transport's vocabulary, not ours: any backend exposing a code
/// from this set can sit behind the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorCode {
    BucketNotFound,
    ObjectNotFound,
    ProjectNotFound,
    /// The transport itself could not determine what went wrong.
    Unknown,
    RetryLimitExceeded,
    Unauthorized,
    Unauthenticated,
    QuotaExceeded,
    InvalidArgument,
    DownloadSizeExceeded,
    Cancelled,
    Other,
}

/// Error returned by an [`ObjectStore`](crate::modules::storage::ObjectStore)
/// implementation. The message is for logging only and never reaches callers
/// of the gateway.
#[derive(Debug, Error, Clone)]
#[error("{code:?}: {message}")]
pub struct TransportError {
    pub code: TransportErrorCode,
    pub message: String,
}

impl TransportError {
    pub fn new(code: TransportErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl CloudStorageError {
    /// Classify a transport failure code into one of the four kinds.
    ///
    /// Quota, malformed-request, cancellation and oversize cases intentionally
    /// fall through to `Unknown`; the taxonomy stays coarse.
    pub fn classify(code: TransportErrorCode) -> Self {
        match code {
            TransportErrorCode::BucketNotFound
            | TransportErrorCode::ObjectNotFound
            | TransportErrorCode::ProjectNotFound
            | TransportErrorCode::Unknown => CloudStorageError::NotFound,
            TransportErrorCode::RetryLimitExceeded => CloudStorageError::LimitExceeded,
            TransportErrorCode::Unauthorized | TransportErrorCode::Unauthenticated => {
                CloudStorageError::Unauthorized
            }
            _ => CloudStorageError::Unknown,
        }
    }
}

impl From<&TransportError> for CloudStorageError {
    fn from(err: &TransportError) -> Self {
        CloudStorageError::classify(err.code)
    }
}

pub type Result<T> = std::result::Result<T, CloudStorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_codes() {
        for code in [
            TransportErrorCode::BucketNotFound,
            TransportErrorCode::ObjectNotFound,
            TransportErrorCode::ProjectNotFound,
            TransportErrorCode::Unknown,
        ] {
            assert_eq!(
                CloudStorageError::classify(code),
                CloudStorageError::NotFound
            );
        }
    }

    #[test]
    fn test_limit_exceeded_code() {
        assert_eq!(
            CloudStorageError::classify(TransportErrorCode::RetryLimitExceeded),
            CloudStorageError::LimitExceeded
        );
    }

    #[test]
    fn test_unauthorized_codes() {
        assert_eq!(
            CloudStorageError::classify(TransportErrorCode::Unauthorized),
            CloudStorageError::Unauthorized
        );
        assert_eq!(
            CloudStorageError::classify(TransportErrorCode::Unauthenticated),
            CloudStorageError::Unauthorized
        );
    }

    #[test]
    fn test_everything_else_is_unknown() {
        for code in [
            TransportErrorCode::QuotaExceeded,
            TransportErrorCode::InvalidArgument,
            TransportErrorCode::DownloadSizeExceeded,
            TransportErrorCode::Cancelled,
            TransportErrorCode::Other,
        ] {
            assert_eq!(
                CloudStorageError::classify(code),
                CloudStorageError::Unknown
            );
        }
    }

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::new(TransportErrorCode::ObjectNotFound, "NoSuchKey: missing");
        assert_eq!(CloudStorageError::from(&err), CloudStorageError::NotFound);
    }
}
