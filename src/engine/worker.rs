use poll_promise::Promise;

use crate::data::{ApiClient, BitcoinHistory, BitcoinKpisEndpoint, Cryptos, Proxies};
use crate::utils::app_time::now;

use super::messages::{LoadJob, LoadRequest, LoadResult, Payload};

/// Starts the fetch for `job` in the background.
///
/// Native builds run it on the tokio runtime entered in `main`; the browser
/// build runs it on the JS event loop.
pub fn spawn_load(client: &ApiClient, job: LoadJob) -> Promise<LoadResult> {
    let client = client.clone();

    #[cfg(not(target_arch = "wasm32"))]
    let promise = Promise::spawn_async(run_load(client, job));

    #[cfg(target_arch = "wasm32")]
    let promise = Promise::spawn_local(run_load(client, job));

    promise
}

async fn run_load(client: ApiClient, job: LoadJob) -> LoadResult {
    let start = now();

    let result = match job.request {
        LoadRequest::Market => client.fetch::<Cryptos>().await.map(Payload::Market),
        LoadRequest::BitcoinKpis => client
            .fetch::<BitcoinKpisEndpoint>()
            .await
            .map(Payload::BitcoinKpis),
        LoadRequest::BitcoinHistory => client
            .fetch::<BitcoinHistory>()
            .await
            .map(Payload::BitcoinHistory),
        LoadRequest::Proxies => client.fetch::<Proxies>().await.map(Payload::Proxies),
    };

    LoadResult {
        job,
        duration: start.elapsed(),
        result,
    }
}
