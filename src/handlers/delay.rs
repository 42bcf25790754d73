//! Delayed probe: sleeps a fixed 300 ms, then echoes the serialized request.

use serde_json::Value;
use tracing::info;

use crate::errors::HandlerError;
use crate::event::{ProbeResponse, serialize_event};
use crate::handlers::{PRIMARY_DELAY, pause};

/// # Errors
///
/// Returns [`HandlerError::Serialization`] if the event cannot be encoded.
pub async fn handler(payload: Value) -> Result<ProbeResponse, HandlerError> {
    info!("delay probe invoked");
    pause(PRIMARY_DELAY).await;
    let event_json = serialize_event(&payload)?;
    Ok(ProbeResponse::ok(event_json))
}
