//! Fee history error types.

use gasprice_primitives::{BlockNumber, BlockNumberOrTag};
use gasprice_provider::ProviderError;

/// Result alias for fee history queries.
pub type FeeHistoryResult<T> = Result<T, FeeHistoryError>;

/// Errors a fee history query can fail with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeeHistoryError {
    /// A reward percentile is outside of `[0, 100]`.
    #[error("invalid reward percentile: {0}")]
    InvalidRewardPercentile(f64),
    /// The reward percentiles are not sorted in nondecreasing order.
    #[error("invalid reward percentile: #{prev_index}:{prev} > #{index}:{value}")]
    UnsortedRewardPercentiles {
        /// Position of the larger, earlier percentile.
        prev_index: usize,
        /// Value of the earlier percentile.
        prev: f64,
        /// Position of the offending percentile.
        index: usize,
        /// Value of the offending percentile.
        value: f64,
    },
    /// The requested newest block is above the current chain head.
    #[error("request beyond head block: requested {requested}, head {head}")]
    RequestBeyondHead {
        /// The requested newest block.
        requested: BlockNumber,
        /// The chain head at the time of the request.
        head: BlockNumber,
    },
    /// The header of the given block could not be found.
    #[error("header not found for block {0}")]
    HeaderNotFound(BlockNumberOrTag),
    /// The block with the given number could not be found.
    #[error("block not found: {0}")]
    BlockNotFound(BlockNumber),
    /// A backend lookup failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// All block fetchers stopped before every block of the window was delivered.
    #[error("block fetchers terminated unexpectedly")]
    FetcherTerminated,
}

impl FeeHistoryError {
    /// Returns `true` if the request was rejected before any block was fetched because it is
    /// malformed.
    pub const fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::InvalidRewardPercentile(_) |
                Self::UnsortedRewardPercentiles { .. } |
                Self::RequestBeyondHead { .. }
        )
    }
}
