//! Latency Probe - serverless benchmark handlers for cold-start and
//! invocation latency measurements.
//!
//! This crate implements four independent Lambda entry points, each a
//! standalone probe the benchmarking harness deploys and invokes:
//! 1. A passthrough probe that echoes the serialized request immediately
//! 2. A delay probe that sleeps 300 ms before echoing
//! 3. A storage-light probe that adds an S3 put/wait/delete round-trip
//! 4. A storage-heavy probe that also parses a large bundled JSON asset
//!
//! # Architecture
//!
//! The probes use:
//! - AWS Lambda for serverless execution
//! - S3 as a latency-inducing external collaborator (never a data source)
//! - Tokio for the async runtime
//! - tracing for structured JSON logs
//!
//! Every invocation is stateless and sequential; the only suspension points
//! are the two fixed artificial delays.

pub mod assets;
pub mod errors;
pub mod event;
pub mod handlers;
pub mod storage;

/// Sets up JSON-structured logging for a probe binary.
///
/// Call once at process start, before the Lambda runtime loop:
///
/// ```
/// latency_probe::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
