//! Delayed probe with a light storage round-trip.
//!
//! Sleeps, serializes the request, writes the serialization to the store
//! under a random key, waits again, deletes the object, then echoes the
//! original serialization. The store output never reaches the response.

use serde_json::Value;
use tracing::{error, info};

use crate::errors::HandlerError;
use crate::event::{ProbeResponse, serialize_event, stage_bucket};
use crate::handlers::{PRIMARY_DELAY, pause, storage_round_trip};
use crate::storage::ObjectStore;

/// # Errors
///
/// Returns [`HandlerError::Serialization`], [`HandlerError::StorageWrite`]
/// or [`HandlerError::StorageDelete`]; a missing bucket stage variable is
/// answered with a 400 response instead of an error.
pub async fn handler(
    payload: Value,
    store: &impl ObjectStore,
) -> Result<ProbeResponse, HandlerError> {
    info!("storage-light probe invoked");
    pause(PRIMARY_DELAY).await;
    let event_json = serialize_event(&payload)?;

    let Some(bucket) = stage_bucket(&payload) else {
        error!("no bucket stage variable on request");
        return Ok(ProbeResponse::missing_bucket());
    };
    storage_round_trip(store, bucket, event_json.as_bytes()).await?;

    Ok(ProbeResponse::ok(event_json))
}
