use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const SNAPSHOTS_INGESTED: &str = "snapshots_ingested_total";
pub const SNAPSHOT_INGEST_FAILURES: &str = "snapshot_ingest_failures_total";
pub const TRACKED_ACCOUNTS: &str = "tracked_accounts";

/// Install the Prometheus exporter as the global recorder.
/// The returned handle renders the text/plain scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register so the series appear before the first ingest.
    counter!(SNAPSHOTS_INGESTED).absolute(0);
    counter!(SNAPSHOT_INGEST_FAILURES).absolute(0);
    gauge!(TRACKED_ACCOUNTS).set(0.0);

    Ok(handle)
}

pub fn record_ingest(ok: bool) {
    if ok {
        counter!(SNAPSHOTS_INGESTED).increment(1);
    } else {
        counter!(SNAPSHOT_INGEST_FAILURES).increment(1);
    }
}

pub fn set_tracked_accounts(count: usize) {
    gauge!(TRACKED_ACCOUNTS).set(count as f64);
}
