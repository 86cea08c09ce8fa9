//! The fee history oracle.

use crate::{
    config::FeeHistoryConfig,
    error::{FeeHistoryError, FeeHistoryResult},
    fetch::BlockFetcher,
    metrics::FeeHistoryMetrics,
    resolve::resolve_block_range,
    types::FeeHistory,
};
use gasprice_chainspec::ChainSpec;
use gasprice_primitives::BlockNumberOrTag;
use gasprice_provider::FeeHistoryProvider;
use gasprice_tasks::{TaskSpawner, TokioTaskExecutor};
use std::{sync::Arc, time::Instant};
use tracing::{debug, warn};

/// Reports base fees, gas usage and reward percentiles of recent blocks.
///
/// Blocks of a window are fetched concurrently by a bounded number of blocking workers and
/// reassembled in block order.
#[derive(Debug)]
pub struct FeeHistoryOracle<Provider> {
    /// The type used to read chain data
    provider: Provider,
    /// Chain spec, read once at construction
    chain_spec: Arc<ChainSpec>,
    /// The config for the oracle
    config: FeeHistoryConfig,
    /// Spawns the block fetchers
    executor: Box<dyn TaskSpawner>,
    metrics: FeeHistoryMetrics,
}

impl<Provider> FeeHistoryOracle<Provider>
where
    Provider: FeeHistoryProvider + Clone,
{
    /// Creates a new oracle that spawns its block fetchers on the current tokio runtime.
    pub fn new(provider: Provider, config: FeeHistoryConfig) -> Self {
        Self::with_spawner(provider, config, TokioTaskExecutor::default().boxed())
    }

    /// Creates a new oracle that spawns its block fetchers with the given executor.
    pub fn with_spawner(
        provider: Provider,
        mut config: FeeHistoryConfig,
        executor: Box<dyn TaskSpawner>,
    ) -> Self {
        if config.max_block_fetchers == 0 {
            warn!(
                target: "rpc::fee_history",
                "Invalid configured number of block fetchers, using 1 instead"
            );
            config.max_block_fetchers = 1;
        }
        let chain_spec = provider.chain_spec();
        Self { provider, chain_spec, config, executor, metrics: FeeHistoryMetrics::default() }
    }

    /// Returns the configuration of the oracle.
    pub const fn config(&self) -> &FeeHistoryConfig {
        &self.config
    }

    /// Returns the chain spec the oracle was created with.
    pub const fn chain_spec(&self) -> &Arc<ChainSpec> {
        &self.chain_spec
    }

    /// Returns the provider the oracle reads from.
    pub const fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Reports the fee history of up to `block_count` blocks ending at `newest_block`.
    ///
    /// The window is truncated to the configured maximum and to the blocks that exist between
    /// genesis and `newest_block`. [`BlockNumberOrTag::Pending`] is served as
    /// [`BlockNumberOrTag::Latest`] with one block less.
    ///
    /// If `reward_percentiles` are provided, they must be sorted in nondecreasing order and lie
    /// within `[0, 100]`, and the [`FeeHistory`] will include the gas weighted reward at each of
    /// them for every block.
    ///
    /// Requesting zero blocks, or a window that resolves to zero blocks, returns an empty
    /// [`FeeHistory`]. If any block of the window cannot be fetched, the whole request fails with
    /// that error.
    pub async fn fee_history(
        &self,
        block_count: u64,
        newest_block: BlockNumberOrTag,
        reward_percentiles: Option<Vec<f64>>,
    ) -> FeeHistoryResult<FeeHistory> {
        let start = Instant::now();
        self.metrics.requests.increment(1);

        let res = self.fee_history_inner(block_count, newest_block, reward_percentiles).await;

        self.metrics.request_duration_seconds.record(start.elapsed().as_secs_f64());
        if res.is_err() {
            self.metrics.failed_requests.increment(1);
        }
        res
    }

    async fn fee_history_inner(
        &self,
        mut block_count: u64,
        newest_block: BlockNumberOrTag,
        reward_percentiles: Option<Vec<f64>>,
    ) -> FeeHistoryResult<FeeHistory> {
        if block_count == 0 {
            return Ok(FeeHistory::default())
        }

        let percentiles = reward_percentiles.unwrap_or_default();
        let with_rewards = !percentiles.is_empty();

        let max_fee_history = self.config.max_history(with_rewards);
        if block_count > max_fee_history {
            warn!(
                target: "rpc::fee_history",
                requested = block_count,
                truncated = max_fee_history,
                "Sanitizing fee history block count"
            );
            block_count = max_fee_history;
        }

        validate_reward_percentiles(&percentiles)?;

        let (last_block, block_count) =
            resolve_block_range(&self.provider, newest_block, block_count)?;
        if block_count == 0 {
            return Ok(FeeHistory::default())
        }
        // block_count is at most last_block + 1, so this cannot underflow
        let oldest_block = last_block - (block_count - 1);

        let mut results = BlockFetcher::new(
            self.provider.clone(),
            Arc::clone(&self.chain_spec),
            percentiles,
            oldest_block,
            block_count,
            self.metrics.clone(),
        )
        .spawn(&*self.executor, self.config.max_block_fetchers);

        let len = block_count as usize;
        let mut base_fee_per_gas = vec![0; len + 1];
        let mut gas_used_ratio = vec![0.; len];
        let mut reward = vec![None; len];

        for _ in 0..len {
            let Some(fetched) = results.recv().await else {
                return Err(FeeHistoryError::FetcherTerminated)
            };
            let fees = match fetched.result {
                Ok(fees) => fees,
                Err(err) => {
                    debug!(
                        target: "rpc::fee_history",
                        block_number = fetched.block_number,
                        %err,
                        "Failed to fetch block, aborting fee history request"
                    );
                    return Err(err)
                }
            };

            let index = (fetched.block_number - oldest_block) as usize;
            base_fee_per_gas[index] = fees.base_fee;
            if index + 1 == len {
                // the base fee of the block after the newest block is derived from the newest
                base_fee_per_gas[len] = fees.next_base_fee;
            }
            gas_used_ratio[index] = fees.gas_used_ratio;
            reward[index] = fees.rewards;
        }

        Ok(FeeHistory {
            oldest_block,
            base_fee_per_gas,
            gas_used_ratio,
            reward: with_rewards.then_some(reward),
        })
    }
}

/// Checks that every percentile lies within `[0, 100]` and that they are sorted in
/// nondecreasing order.
pub fn validate_reward_percentiles(percentiles: &[f64]) -> FeeHistoryResult<()> {
    for (index, &value) in percentiles.iter().enumerate() {
        if !(0. ..=100.).contains(&value) {
            return Err(FeeHistoryError::InvalidRewardPercentile(value))
        }
        if index > 0 && value < percentiles[index - 1] {
            return Err(FeeHistoryError::UnsortedRewardPercentiles {
                prev_index: index - 1,
                prev: percentiles[index - 1],
                index,
                value,
            })
        }
    }
    Ok(())
}
