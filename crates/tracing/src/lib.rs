//! Logging setup for the fee history oracle.
//!
//! The oracle logs under the `rpc::fee_history` target, and its block fetchers under
//! `rpc::fee_history::fetch`. [`build_env_filter`] combines [`FEE_HISTORY_DIRECTIVES`] with
//! `RUST_LOG` so both targets can be tuned without touching the rest of the host's logging.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-export tracing crates
pub use tracing;
pub use tracing_subscriber;

pub use filter::{build_env_filter, FEE_HISTORY_DIRECTIVES};
pub use test_tracer::TestTracer;

mod filter;
mod test_tracer;

/// Installs a global tracing subscriber.
pub trait Tracer {
    /// Initialize the logging configuration.
    ///
    /// Fails if a directive is malformed or a global subscriber is already set.
    fn init(self) -> eyre::Result<()>;
}

/// Initializes a tracing subscriber for tests.
///
/// The filter is configurable via `RUST_LOG`.
///
/// # Note
///
/// The subscriber will silently fail if it could not be installed.
pub fn init_test_tracing() {
    let _ = TestTracer::default().init();
}
