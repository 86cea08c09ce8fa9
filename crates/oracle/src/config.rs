use serde::{Deserialize, Serialize};

/// Default ceiling on the number of blocks served by a header-only query.
pub const DEFAULT_MAX_HEADER_HISTORY: u64 = 1024;

/// Default ceiling on the number of blocks served by a query with reward percentiles.
pub const DEFAULT_MAX_BLOCK_HISTORY: u64 = 100;

/// Default number of workers fetching blocks for a single query.
pub const DEFAULT_MAX_BLOCK_FETCHERS: usize = 4;

/// Settings for the [`FeeHistoryOracle`](crate::FeeHistoryOracle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeHistoryConfig {
    /// Maximum number of blocks a query that only needs headers may cover.
    pub max_header_history: u64,
    /// Maximum number of blocks a query that requests reward percentiles may cover.
    ///
    /// Such queries load full blocks and receipts, so this is usually smaller than
    /// `max_header_history`.
    pub max_block_history: u64,
    /// Number of workers fetching blocks concurrently for one query.
    pub max_block_fetchers: usize,
}

impl Default for FeeHistoryConfig {
    fn default() -> Self {
        Self {
            max_header_history: DEFAULT_MAX_HEADER_HISTORY,
            max_block_history: DEFAULT_MAX_BLOCK_HISTORY,
            max_block_fetchers: DEFAULT_MAX_BLOCK_FETCHERS,
        }
    }
}

impl FeeHistoryConfig {
    /// Returns the maximum window size for a query of the given shape.
    #[inline]
    pub const fn max_history(&self, with_rewards: bool) -> u64 {
        if with_rewards {
            self.max_block_history
        } else {
            self.max_header_history
        }
    }
}
