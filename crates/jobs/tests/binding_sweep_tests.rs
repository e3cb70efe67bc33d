use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use warden_dns_application::services::ClientBindingCache;
use warden_dns_jobs::BindingSweepJob;

#[tokio::test]
async fn test_sweep_removes_expired_bindings() {
    let bindings = Arc::new(ClientBindingCache::with_ttl(Duration::from_millis(20)));
    bindings.set("10.0.0.2".parse().unwrap(), Arc::from("device-a"));
    bindings.set("10.0.0.3".parse().unwrap(), Arc::from("device-b"));
    assert_eq!(bindings.len(), 2);

    let job = Arc::new(BindingSweepJob::new(Arc::clone(&bindings)).with_interval(1));
    job.start().await;

    // Entries expire after 20ms; the next tick sweeps them out.
    for _ in 0..300 {
        if bindings.is_empty() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("sweep never removed expired bindings");
}

#[tokio::test]
async fn test_cancellation_stops_the_job() {
    let bindings = Arc::new(ClientBindingCache::with_ttl(Duration::from_millis(10)));
    let token = CancellationToken::new();

    let job = Arc::new(
        BindingSweepJob::new(Arc::clone(&bindings))
            .with_interval(1)
            .with_cancellation(token.clone()),
    );
    job.start().await;

    token.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // After cancellation the job no longer sweeps; expired entries linger
    // until read.
    bindings.set("10.0.0.2".parse().unwrap(), Arc::from("device-a"));
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(bindings.len(), 1);
    assert!(bindings.get("10.0.0.2".parse().unwrap()).is_none());
}
