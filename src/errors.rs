use thiserror::Error;

/// Terminal errors for a probe invocation.
///
/// Every variant aborts the invocation on first occurrence; nothing is
/// retried or recovered locally. A delete failure after a successful put
/// leaves the written object orphaned in the bucket.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to serialize request event: {0}")]
    Serialization(String),

    #[error("Failed to resolve object store configuration: {0}")]
    Configuration(String),

    #[error("Failed to put object into bucket: {0}")]
    StorageWrite(String),

    #[error("Failed to delete object from bucket: {0}")]
    StorageDelete(String),

    #[error("Failed to read asset file: {0}")]
    AssetRead(String),

    #[error("Failed to parse asset file as JSON: {0}")]
    AssetParse(String),
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::Serialization(error.to_string())
    }
}

impl From<std::io::Error> for HandlerError {
    fn from(error: std::io::Error) -> Self {
        HandlerError::AssetRead(error.to_string())
    }
}
