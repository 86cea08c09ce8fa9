//! Fee history oracle metrics.
use metrics::{Counter, Histogram};
use metrics_derive::Metrics;

/// Metrics of the fee history oracle.
#[derive(Metrics, Clone)]
#[metrics(scope = "rpc.fee_history")]
pub(crate) struct FeeHistoryMetrics {
    /// Number of fee history requests received
    pub(crate) requests: Counter,
    /// Number of fee history requests that returned an error
    pub(crate) failed_requests: Counter,
    /// Number of blocks fetched and processed
    pub(crate) fetched_blocks: Counter,
    /// Number of blocks whose rewards could not be computed because data was missing
    pub(crate) degraded_blocks: Counter,
    /// Time it took to answer a fee history request
    pub(crate) request_duration_seconds: Histogram,
}
