use latency_probe::event::{MISSING_BUCKET_BODY, ProbeResponse};

/// Tests for the response type serialization.
/// These verify that the wire shape matches the proxy-integration contract
/// the benchmarking harness parses.

#[test]
fn test_ok_response_shape() {
    let response = ProbeResponse::ok("{\"a\":1}".to_string());
    let serialized = serde_json::to_string(&response).unwrap();

    assert!(
        serialized.contains("\"statusCode\":200"),
        "statusCode must be camelCase and 200"
    );
    assert!(
        serialized.contains("\"body\":\"{\\\"a\\\":1}\""),
        "body must carry the echoed serialization verbatim"
    );
}

#[test]
fn test_missing_bucket_response_literal() {
    let response = ProbeResponse::missing_bucket();

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, MISSING_BUCKET_BODY);
    assert_eq!(response.body, "Bucket name not provided in stage variables");
}

#[test]
fn test_response_round_trips_through_serde() {
    let response = ProbeResponse::ok("payload".to_string());
    let serialized = serde_json::to_string(&response).unwrap();
    let reparsed: ProbeResponse = serde_json::from_str(&serialized).unwrap();

    assert_eq!(reparsed, response);
}
