//! Delayed probe with a heavy storage round-trip.
//!
//! Identical to the light variant except that a large bundled JSON asset is
//! read and parsed before the round-trip. The parsed value is discarded; the
//! load exists to inflate the package size and cold-start working set. An
//! asset failure aborts the invocation before any store call is made.

use serde_json::Value;
use tracing::{error, info};

use crate::assets::{MOCK_ASSET_PATH, load_mock_asset};
use crate::errors::HandlerError;
use crate::event::{ProbeResponse, serialize_event, stage_bucket};
use crate::handlers::{PRIMARY_DELAY, pause, storage_round_trip};
use crate::storage::ObjectStore;

/// # Errors
///
/// Returns [`HandlerError::Serialization`], [`HandlerError::AssetRead`],
/// [`HandlerError::AssetParse`], [`HandlerError::StorageWrite`] or
/// [`HandlerError::StorageDelete`]; a missing bucket stage variable is
/// answered with a 400 response instead of an error.
pub async fn handler(
    payload: Value,
    store: &impl ObjectStore,
) -> Result<ProbeResponse, HandlerError> {
    handler_with_asset(payload, store, MOCK_ASSET_PATH).await
}

/// Same as [`handler`] with the asset path injectable for tests.
pub async fn handler_with_asset(
    payload: Value,
    store: &impl ObjectStore,
    asset_path: &str,
) -> Result<ProbeResponse, HandlerError> {
    info!("storage-heavy probe invoked");
    pause(PRIMARY_DELAY).await;
    let event_json = serialize_event(&payload)?;

    let Some(bucket) = stage_bucket(&payload) else {
        error!("no bucket stage variable on request");
        return Ok(ProbeResponse::missing_bucket());
    };
    // Parsed contents are dropped on purpose; only the load cost matters.
    let _asset = load_mock_asset(asset_path).await?;

    storage_round_trip(store, bucket, event_json.as_bytes()).await?;

    Ok(ProbeResponse::ok(event_json))
}
