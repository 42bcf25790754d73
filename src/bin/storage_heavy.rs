use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use latency_probe::handlers::storage_heavy;
use latency_probe::storage::S3Store;

#[tokio::main]
async fn main() -> Result<(), Error> {
    latency_probe::setup_logging();

    // One store per process; invocations reuse the client.
    let store = S3Store::from_env().await?;
    let store_ref = &store;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        storage_heavy::handler(event.payload, store_ref)
            .await
            .map_err(Error::from)
    }))
    .await
}
