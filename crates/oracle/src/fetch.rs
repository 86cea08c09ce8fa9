//! Concurrent block fetching for a fee history window.

use crate::{
    error::{FeeHistoryError, FeeHistoryResult},
    metrics::FeeHistoryMetrics,
    processor::process_block,
    types::ProcessedFees,
};
use gasprice_chainspec::ChainSpec;
use gasprice_primitives::BlockNumber;
use gasprice_provider::FeeHistoryProvider;
use gasprice_tasks::TaskSpawner;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Outcome of fetching and processing one block of the window.
///
/// Exactly one is emitted per claimed block, whether or not the fetch succeeded.
#[derive(Debug)]
pub(crate) struct FetchedFees {
    /// The block this outcome belongs to.
    pub(crate) block_number: BlockNumber,
    /// Processed fees, or the error that prevented them.
    pub(crate) result: FeeHistoryResult<ProcessedFees>,
}

/// Shared state of the workers serving one fee history window.
#[derive(Debug)]
pub(crate) struct BlockFetcher<Provider> {
    provider: Provider,
    chain_spec: Arc<ChainSpec>,
    percentiles: Vec<f64>,
    /// Offset within the window of the next block to claim.
    next: AtomicU64,
    oldest_block: BlockNumber,
    block_count: u64,
    metrics: FeeHistoryMetrics,
}

impl<Provider> BlockFetcher<Provider>
where
    Provider: FeeHistoryProvider,
{
    /// Creates a fetcher for the window of `block_count` blocks starting at `oldest_block`.
    ///
    /// `block_count` must be non-zero and the window must not extend past `u64::MAX`.
    pub(crate) fn new(
        provider: Provider,
        chain_spec: Arc<ChainSpec>,
        percentiles: Vec<f64>,
        oldest_block: BlockNumber,
        block_count: u64,
        metrics: FeeHistoryMetrics,
    ) -> Self {
        Self {
            provider,
            chain_spec,
            percentiles,
            next: AtomicU64::new(0),
            oldest_block,
            block_count,
            metrics,
        }
    }

    /// Spawns up to `max_fetchers` blocking workers that drain the window and returns the
    /// receiving end of their results.
    ///
    /// The channel can hold the entire window, so no worker ever waits on the receiver. Workers
    /// stop once the window is exhausted or the receiver is dropped.
    pub(crate) fn spawn(
        self,
        executor: &dyn TaskSpawner,
        max_fetchers: usize,
    ) -> mpsc::Receiver<FetchedFees> {
        let capacity = usize::try_from(self.block_count).unwrap_or(usize::MAX).max(1);
        let (tx, rx) = mpsc::channel(capacity);

        let workers = max_fetchers.min(capacity).max(1);
        let fetcher = Arc::new(self);
        for _ in 0..workers {
            let fetcher = Arc::clone(&fetcher);
            let tx = tx.clone();
            executor.spawn_blocking_task(Box::pin(async move { fetcher.run(&tx) }));
        }

        rx
    }

    /// Claims blocks until the window is exhausted, emitting one result per block.
    fn run(&self, results: &mpsc::Sender<FetchedFees>) {
        loop {
            if results.is_closed() {
                return
            }

            // the offset stays far below u64::MAX: at most block_count plus one per worker
            let offset = self.next.fetch_add(1, Ordering::Relaxed);
            if offset >= self.block_count {
                return
            }
            let block_number = self.oldest_block + offset;

            let result = self.fetch_block(block_number);
            if let Err(err) = results.try_send(FetchedFees { block_number, result }) {
                // capacity covers the whole window, only a dropped receiver ends up here
                debug!(
                    target: "rpc::fee_history::fetch",
                    block_number,
                    %err,
                    "Stopping block fetcher"
                );
                return
            }
        }
    }

    /// Loads the data needed for the block and derives its fees.
    ///
    /// Only the header is loaded if no reward percentiles were requested.
    fn fetch_block(&self, block_number: BlockNumber) -> FeeHistoryResult<ProcessedFees> {
        let fees = if self.percentiles.is_empty() {
            let header = self
                .provider
                .header_by_number(block_number)?
                .ok_or(FeeHistoryError::HeaderNotFound(block_number.into()))?;
            process_block(&self.chain_spec, &header, None, None, &[])
        } else {
            let block = self
                .provider
                .block_by_number(block_number)?
                .ok_or(FeeHistoryError::BlockNotFound(block_number))?;
            let receipts = self.provider.receipts_by_block_hash(block.hash())?;
            let fees = process_block(
                &self.chain_spec,
                &block.header,
                Some(&block),
                receipts.as_deref(),
                &self.percentiles,
            );
            if fees.rewards.is_none() {
                self.metrics.degraded_blocks.increment(1);
            }
            fees
        };

        self.metrics.fetched_blocks.increment(1);
        trace!(
            target: "rpc::fee_history::fetch",
            block_number,
            base_fee = fees.base_fee,
            gas_used_ratio = fees.gas_used_ratio,
            "Processed block"
        );
        Ok(fees)
    }
}
