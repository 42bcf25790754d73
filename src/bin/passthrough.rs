use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use latency_probe::handlers::passthrough;

#[tokio::main]
async fn main() -> Result<(), Error> {
    latency_probe::setup_logging();
    run(service_fn(|event: LambdaEvent<Value>| async move {
        passthrough::handler(event.payload).await.map_err(Error::from)
    }))
    .await
}
