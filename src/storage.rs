//! Object store access for the storage probes.
//!
//! The store is exercised purely as a latency-inducing side effect: each
//! invocation writes the serialized request under a fresh UUIDv4 key, waits,
//! then deletes it. Nothing read from the store ever feeds the response.
//! Keys are unique per invocation, so concurrent invocations cannot collide.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use crate::errors::HandlerError;

/// Minimal blob-store surface the probes need. Credentials and endpoint
/// resolution are the implementation's concern.
#[async_trait]
pub trait ObjectStore {
    /// Writes `body` under `(bucket, key)`.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::StorageWrite`] on any failure; a single
    /// failed attempt is fatal to the invocation.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), HandlerError>;

    /// Deletes the `(bucket, key)` object.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::StorageDelete`] on any failure. The caller
    /// propagates this even after a successful put, orphaning the object.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), HandlerError>;
}

/// S3-backed store used by the deployed probes.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    /// Builds a store from the ambient AWS configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Configuration`] if the resolved configuration
    /// carries no region, in which case the S3 client cannot sign requests.
    pub async fn from_env() -> Result<Self, HandlerError> {
        let shared_config = aws_config::from_env().load().await;
        if shared_config.region().is_none() {
            return Err(HandlerError::Configuration(
                "no AWS region in ambient configuration".to_string(),
            ));
        }
        Ok(Self {
            client: S3Client::new(&shared_config),
        })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), HandlerError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| HandlerError::StorageWrite(e.to_string()))?;
        info!(bucket, key, "put probe object");
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), HandlerError> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| HandlerError::StorageDelete(e.to_string()))?;
        info!(bucket, key, "deleted probe object");
        Ok(())
    }
}
