use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Directives for the oracle's own log targets.
///
/// Sanitised requests and degraded blocks are reported, fetch worker hand-off is not.
pub const FEE_HISTORY_DIRECTIVES: [&str; 2] =
    ["rpc::fee_history=info", "rpc::fee_history::fetch=warn"];

/// Builds an [`EnvFilter`] from `default_level`, [`FEE_HISTORY_DIRECTIVES`], `RUST_LOG` and the
/// comma separated `directives`, in that order.
///
/// A later directive for the same target replaces an earlier one, so `RUST_LOG` can override the
/// defaults and `directives` can override `RUST_LOG`.
pub fn build_env_filter(default_level: LevelFilter, directives: &str) -> eyre::Result<EnvFilter> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = EnvFilter::builder().with_default_directive(default_level.into()).parse_lossy("");

    let filter = FEE_HISTORY_DIRECTIVES
        .into_iter()
        .chain(env_directives.split(','))
        .chain(directives.split(','))
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .try_fold(filter, |filter, directive| Ok(filter.add_directive(directive.parse()?)));
    filter
}
