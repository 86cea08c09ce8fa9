//! Task spawning.
//!
//! Components that fan work out to tokio tasks take a `Box<dyn TaskSpawner>` instead of calling
//! [`tokio::task::spawn`] directly, so the executor can be swapped out in tests or embedded into
//! a larger node runtime.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

use crate::metrics::TaskExecutorMetrics;
use dyn_clone::DynClone;
use futures_util::future::BoxFuture;
use tokio::task::JoinHandle;

pub mod metrics;

/// A type that can spawn tasks.
///
/// # Examples
///
/// Use the [`TokioTaskExecutor`] that spawns with [`tokio::task::spawn`]
///
/// ```
/// # async fn t() {
/// use gasprice_tasks::{TaskSpawner, TokioTaskExecutor};
/// let executor = TokioTaskExecutor::default();
///
/// let task = executor.spawn_task(Box::pin(async {
///     // -- snip --
/// }));
/// task.await.unwrap();
/// # }
/// ```
///
/// The [`TaskSpawner`] trait is [`DynClone`] so `Box<dyn TaskSpawner>` are also `Clone`.
#[auto_impl::auto_impl(&, Arc)]
pub trait TaskSpawner: Send + Sync + Unpin + std::fmt::Debug + DynClone {
    /// Spawns the task onto the runtime.
    /// See also [`tokio::runtime::Handle::spawn`].
    fn spawn_task(&self, fut: BoxFuture<'static, ()>) -> JoinHandle<()>;

    /// Spawns a task that is allowed to block onto the runtime.
    fn spawn_blocking_task(&self, fut: BoxFuture<'static, ()>) -> JoinHandle<()>;
}

dyn_clone::clone_trait_object!(TaskSpawner);

/// An [`TaskSpawner`] that uses [`tokio::task::spawn`] to execute tasks
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct TokioTaskExecutor {
    metrics: TaskExecutorMetrics,
}

impl TokioTaskExecutor {
    /// Converts the instance to a boxed [`TaskSpawner`].
    pub fn boxed(self) -> Box<dyn TaskSpawner + 'static> {
        Box::new(self)
    }
}

impl TaskSpawner for TokioTaskExecutor {
    fn spawn_task(&self, fut: BoxFuture<'static, ()>) -> JoinHandle<()> {
        self.metrics.inc_regular_task();
        tokio::task::spawn(fut)
    }

    fn spawn_blocking_task(&self, fut: BoxFuture<'static, ()>) -> JoinHandle<()> {
        self.metrics.inc_blocking_task();
        tokio::task::spawn_blocking(move || tokio::runtime::Handle::current().block_on(fut))
    }
}
