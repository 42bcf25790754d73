//! Mock-asset loader for the heavy storage probe.
//!
//! The asset exists only to inflate the deployed bundle and the in-memory
//! working set; its parsed contents are discarded by the caller.

use serde_json::{Map, Value};
use tracing::info;

use crate::errors::HandlerError;

/// Path of the bundled asset, relative to the deployed package root.
pub const MOCK_ASSET_PATH: &str = "assets/large_mock.json";

/// Reads `path` in full and parses it as a JSON object.
///
/// # Errors
///
/// Returns [`HandlerError::AssetRead`] if the file cannot be read and
/// [`HandlerError::AssetParse`] if the contents are not a valid JSON object.
pub async fn load_mock_asset(path: &str) -> Result<Map<String, Value>, HandlerError> {
    let contents = tokio::fs::read(path).await?;
    let parsed: Map<String, Value> = serde_json::from_slice(&contents)
        .map_err(|e| HandlerError::AssetParse(e.to_string()))?;
    info!(path, entries = parsed.len(), "loaded mock asset");
    Ok(parsed)
}
