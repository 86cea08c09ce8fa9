//! Fee history oracle.
//!
//! Answers fee history queries: for a trailing window of blocks it reports the base fee of each
//! block, the projected base fee of the block after the window, the fraction of the fixed block
//! gas ceiling each block used and, optionally, the gas weighted reward at requested
//! percentiles.
//!
//! ```no_run
//! use gasprice_oracle::{FeeHistoryConfig, FeeHistoryOracle};
//! use gasprice_primitives::BlockNumberOrTag;
//! use gasprice_provider::FeeHistoryProvider;
//!
//! async fn recent_fees<P: FeeHistoryProvider + Clone>(provider: P) {
//!     let oracle = FeeHistoryOracle::new(provider, FeeHistoryConfig::default());
//!     let history = oracle
//!         .fee_history(4, BlockNumberOrTag::Latest, Some(vec![10., 50., 90.]))
//!         .await
//!         .unwrap();
//!     println!("{history:?}");
//! }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
pub use config::{
    FeeHistoryConfig, DEFAULT_MAX_BLOCK_FETCHERS, DEFAULT_MAX_BLOCK_HISTORY,
    DEFAULT_MAX_HEADER_HISTORY,
};

mod error;
pub use error::{FeeHistoryError, FeeHistoryResult};

mod fetch;
mod metrics;

mod oracle;
pub use oracle::{validate_reward_percentiles, FeeHistoryOracle};

mod processor;
pub use processor::{calculate_reward_percentiles, process_block};

mod resolve;
pub use resolve::resolve_block_range;

mod types;
pub use types::{FeeHistory, ProcessedFees};
