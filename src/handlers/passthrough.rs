//! No-op probe: echoes the serialized request immediately.
//!
//! Baseline for cold-start measurements; everything the other probes add is
//! measured against this.

use serde_json::Value;
use tracing::info;

use crate::errors::HandlerError;
use crate::event::{ProbeResponse, serialize_event};

/// # Errors
///
/// Returns [`HandlerError::Serialization`] if the event cannot be encoded.
pub async fn handler(payload: Value) -> Result<ProbeResponse, HandlerError> {
    info!("passthrough probe invoked");
    let event_json = serialize_event(&payload)?;
    Ok(ProbeResponse::ok(event_json))
}
