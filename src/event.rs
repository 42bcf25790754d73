//! Inbound event helpers and the response type shared by every probe.
//!
//! The hosting platform hands each probe an API Gateway proxy event as raw
//! JSON. Probes never interpret the event beyond one stage variable; the
//! rest is echoed back verbatim in serialized form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::HandlerError;

/// Stage variable naming the bucket used for the storage round-trip.
pub const STAGE_BUCKET_KEY: &str = "testBucketName";

/// Body returned on the 400 path when the bucket stage variable is absent.
pub const MISSING_BUCKET_BODY: &str = "Bucket name not provided in stage variables";

/// Proxy-integration response: a status code and a body string, produced
/// exactly once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResponse {
    pub status_code: u16,
    pub body: String,
}

impl ProbeResponse {
    /// 200 response echoing the serialized request.
    #[must_use]
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    /// Terminal 400 response for the missing-bucket branch. Not an error.
    #[must_use]
    pub fn missing_bucket() -> Self {
        Self {
            status_code: 400,
            body: MISSING_BUCKET_BODY.to_string(),
        }
    }
}

/// Canonical JSON encoding of the inbound event.
///
/// # Errors
///
/// Returns [`HandlerError::Serialization`] if the event cannot be encoded.
/// Not expected in practice since the payload arrives already JSON-shaped.
pub fn serialize_event(payload: &Value) -> Result<String, HandlerError> {
    serde_json::to_string(payload).map_err(HandlerError::from)
}

/// Looks up the target bucket in `stageVariables`.
///
/// Absence of the stage variables object, of the key, or a non-string value
/// all resolve to `None`; the caller short-circuits to the 400 response.
#[must_use]
pub fn stage_bucket(payload: &Value) -> Option<&str> {
    payload
        .get("stageVariables")
        .and_then(|vars| vars.get(STAGE_BUCKET_KEY))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stage_bucket_reads_named_variable() {
        let payload = json!({
            "path": "/probe",
            "stageVariables": { "testBucketName": "bench-bucket" }
        });
        assert_eq!(stage_bucket(&payload), Some("bench-bucket"));
    }

    #[test]
    fn stage_bucket_missing_variants() {
        assert_eq!(stage_bucket(&json!({ "path": "/probe" })), None);
        assert_eq!(stage_bucket(&json!({ "stageVariables": {} })), None);
        assert_eq!(
            stage_bucket(&json!({ "stageVariables": { "testBucketName": 42 } })),
            None
        );
    }

    #[test]
    fn serialize_event_is_canonical_json() {
        let payload = json!({ "headers": { "x": "y" }, "body": null });
        let encoded = serialize_event(&payload).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(reparsed, payload);
    }
}
