//! Delayed lookups must suspend tasks, not occupy worker threads.

use std::future::Future;
use std::time::{Duration, Instant};

use mono_flux_client::{ClientError, DemoClient, User};

mod common;

const CONCURRENCY: i32 = 20;

/// Issue `CONCURRENCY` lookups at once and return the wall time for all of them.
async fn time_batch<F, Fut>(client: &DemoClient, lookup: F) -> Duration
where
    F: Fn(DemoClient, i32) -> Fut,
    Fut: Future<Output = Result<User, ClientError>> + Send + 'static,
{
    let start = Instant::now();
    let tasks: Vec<_> = (0..CONCURRENCY)
        .map(|id| tokio::spawn(lookup(client.clone(), id)))
        .collect();

    for (id, task) in tasks.into_iter().enumerate() {
        let user = task.await.unwrap().expect("Lookup failed");
        assert_eq!(user.id, id as i32);
    }
    start.elapsed()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_delayed_lookups_overlap() {
    let delay = Duration::from_millis(500);
    let server = common::start_server(delay).await;

    // Client construction loads TLS roots; keep it out of the timed window.
    let client = DemoClient::with_client(common::http_client(), &server.url());

    let baseline =
        time_batch(&client, |client, id| async move { client.user_immediate(id).await }).await;
    let elapsed = time_batch(&client, |client, id| async move { client.user(id).await }).await;
    println!(
        "{} lookups: immediate {:?}, delayed {:?}",
        CONCURRENCY, baseline, elapsed
    );

    // Serialized on two workers the delayed batch would add CONCURRENCY / 2 * delay.
    assert!(
        elapsed < baseline + delay * 3,
        "Lookups should overlap, took {:?} against a {:?} baseline",
        elapsed,
        baseline
    );
}
