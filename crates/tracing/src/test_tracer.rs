use crate::{build_env_filter, Tracer};
use tracing::level_filters::LevelFilter;

/// Subscriber for tests: only the oracle's own targets and `RUST_LOG` are enabled, and output
/// goes through the test harness so it is captured per test.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct TestTracer;

impl Tracer for TestTracer {
    fn init(self) -> eyre::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(build_env_filter(LevelFilter::OFF, "")?)
            .with_test_writer()
            .try_init()
            .map_err(|err| eyre::eyre!(err))
    }
}
