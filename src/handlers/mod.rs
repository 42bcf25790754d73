//! The four probe variants.
//!
//! Each handler is an independent entry point wired to its own binary; the
//! hosting platform invokes exactly one per deployed function. They share
//! the event helpers and, for the storage variants, the put/wait/delete
//! round-trip below.

pub mod delay;
pub mod passthrough;
pub mod storage_heavy;
pub mod storage_light;

use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use crate::errors::HandlerError;
use crate::storage::ObjectStore;

/// Artificial delay applied before the primary work of the delayed probes.
pub const PRIMARY_DELAY: Duration = Duration::from_millis(300);

/// Artificial delay between the storage put and delete.
pub const SECONDARY_DELAY: Duration = Duration::from_millis(100);

/// Suspends the current invocation. Blocks only this invocation's
/// execution; concurrent invocations are the platform's concern.
pub async fn pause(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// One put/wait/delete cycle against the store under a fresh UUIDv4 key.
///
/// The object's lifetime is bounded by this call on the happy path. If the
/// delete fails after a successful put, the error propagates and the object
/// is left orphaned in the bucket; there is no compensating cleanup.
///
/// # Errors
///
/// Propagates the first [`HandlerError::StorageWrite`] or
/// [`HandlerError::StorageDelete`] encountered.
pub async fn storage_round_trip(
    store: &impl ObjectStore,
    bucket: &str,
    payload: &[u8],
) -> Result<(), HandlerError> {
    let key = Uuid::new_v4().to_string();
    info!(bucket, key = %key, "starting storage round-trip");

    store.put_object(bucket, &key, payload.to_vec()).await?;
    pause(SECONDARY_DELAY).await;
    store.delete_object(bucket, &key).await?;

    Ok(())
}
