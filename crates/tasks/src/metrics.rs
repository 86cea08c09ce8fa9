//! Task Executor Metrics
use metrics::Counter;
use metrics_derive::Metrics;

/// Task Executor Metrics
#[derive(Metrics, Clone)]
#[metrics(scope = "executor.spawn")]
pub struct TaskExecutorMetrics {
    /// Number of spawned regular tasks
    pub(crate) regular_tasks: Counter,
    /// Number of spawned blocking tasks
    pub(crate) blocking_tasks: Counter,
}

impl TaskExecutorMetrics {
    pub(crate) fn inc_regular_task(&self) {
        self.regular_tasks.increment(1);
    }

    pub(crate) fn inc_blocking_task(&self) {
        self.blocking_tasks.increment(1);
    }
}
