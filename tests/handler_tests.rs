use std::time::Instant;

use serde_json::{Value, json};

use latency_probe::handlers::{PRIMARY_DELAY, delay, passthrough};

/// Tests for the echo-only probe variants.
/// These verify that the response body is the canonical JSON serialization
/// of the inbound event and nothing else is altered.

fn sample_event() -> Value {
    json!({
        "path": "/bench",
        "httpMethod": "GET",
        "headers": { "x-request-id": "abc-123" },
        "queryStringParameters": { "run": "7" },
        "stageVariables": { "testBucketName": "bench-bucket" },
        "body": null
    })
}

#[tokio::test]
async fn passthrough_echoes_serialized_event() {
    let event = sample_event();
    let response = passthrough::handler(event.clone()).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, serde_json::to_string(&event).unwrap());
}

#[tokio::test]
async fn passthrough_body_round_trips_losslessly() {
    let event = sample_event();
    let response = passthrough::handler(event.clone()).await.unwrap();

    // Parsing the echoed body back must yield the original event value.
    let reparsed: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(reparsed, event);
}

#[tokio::test]
async fn delay_echoes_serialized_event() {
    let event = sample_event();
    let response = delay::handler(event.clone()).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, serde_json::to_string(&event).unwrap());
}

#[tokio::test]
async fn delay_takes_at_least_the_fixed_duration() {
    let started = Instant::now();
    delay::handler(json!({})).await.unwrap();
    let elapsed = started.elapsed();

    assert!(
        elapsed >= PRIMARY_DELAY,
        "delay probe returned after {elapsed:?}, expected at least {PRIMARY_DELAY:?}"
    );
}

#[tokio::test]
async fn handlers_accept_minimal_events() {
    // The probes treat the event as opaque; an empty object is fine.
    let response = passthrough::handler(json!({})).await.unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "{}");
}
