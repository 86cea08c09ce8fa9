use crate::{magma_chain, oracle, oracle_with_config};
use assert_matches::assert_matches;
use gasprice_oracle::{FeeHistory, FeeHistoryConfig, FeeHistoryError, FeeHistoryOracle};
use gasprice_primitives::{constants::UPPER_GAS_LIMIT, BlockNumberOrTag};
use gasprice_provider::{
    test_utils::{MockFeeHistoryProvider, NoopProvider, TestBlockBuilder},
    ProviderError,
};
use gasprice_tracing::{
    tracing::{self, Event, Level, Subscriber},
    tracing_subscriber::{
        layer::{Context, SubscriberExt},
        Layer,
    },
};
use parking_lot::Mutex;
use rand::{random, Rng};
use std::sync::Arc;

/// Records the level and target of every event.
#[derive(Debug, Clone, Default)]
struct RecordedEvents(Arc<Mutex<Vec<(Level, &'static str)>>>);

impl RecordedEvents {
    fn count(&self, level: Level, target: &str) -> usize {
        self.0.lock().iter().filter(|(l, t)| *l == level && *t == target).count()
    }
}

impl<S: Subscriber> Layer<S> for RecordedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        self.0.lock().push((*metadata.level(), metadata.target()));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_blocks_is_empty() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(10, |b| b);
    let oracle = oracle(&provider);

    let history = oracle.fee_history(0, BlockNumberOrTag::Latest, Some(vec![50.])).await.unwrap();
    assert_eq!(history, FeeHistory::default());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_percentiles_rejected_without_backend_calls() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(10, |b| b);
    let oracle = oracle(&provider);

    assert_matches!(
        oracle.fee_history(3, BlockNumberOrTag::Latest, Some(vec![-1.])).await,
        Err(FeeHistoryError::InvalidRewardPercentile(_))
    );
    assert_matches!(
        oracle.fee_history(3, BlockNumberOrTag::Latest, Some(vec![101.])).await,
        Err(FeeHistoryError::InvalidRewardPercentile(_))
    );
    assert_matches!(
        oracle.fee_history(3, BlockNumberOrTag::Latest, Some(vec![50., 10.])).await,
        Err(FeeHistoryError::UnsortedRewardPercentiles { prev_index: 0, index: 1, .. })
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn newest_block_bounded_by_head() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(10, |b| b);
    let oracle = oracle(&provider);

    assert_matches!(
        oracle.fee_history(2, 11.into(), None).await,
        Err(FeeHistoryError::RequestBeyondHead { requested: 11, head: 10 })
    );

    let history = oracle.fee_history(2, 10.into(), None).await.unwrap();
    assert_eq!(history.oldest_block, 9);
    assert_eq!(history.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn window_clamped_to_genesis() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(5, |b| b.transactions([21_000]));
    let oracle = oracle(&provider);

    let history = oracle.fee_history(1000, BlockNumberOrTag::Latest, None).await.unwrap();
    assert_eq!(history.oldest_block, 0);
    assert_eq!(history.gas_used_ratio.len(), 6);
    assert_eq!(history.base_fee_per_gas.len(), 7);
    assert_eq!(history.reward, None);

    let history = oracle.fee_history(10, BlockNumberOrTag::Earliest, None).await.unwrap();
    assert_eq!(history.oldest_block, 0);
    assert_eq!(history.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn head_at_max_block_number() {
    let provider = MockFeeHistoryProvider::default();
    for number in u64::MAX - 3..=u64::MAX {
        let (block, receipts) = TestBlockBuilder::new(number).transactions([21_000]).build();
        provider.add_block(block, Some(receipts));
    }
    let oracle = oracle(&provider);

    let history = oracle.fee_history(2, BlockNumberOrTag::Latest, Some(vec![50.])).await.unwrap();
    assert_eq!(history.oldest_block, u64::MAX - 1);
    assert_eq!(history.len(), 2);
    assert_eq!(history.reward.unwrap().len(), 2);

    let history = oracle.fee_history(4, u64::MAX.into(), None).await.unwrap();
    assert_eq!(history.oldest_block, u64::MAX - 3);
    assert_eq!(history.base_fee_per_gas.len(), 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn window_clamped_to_configured_maximum() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(100, |b| b);
    let config =
        FeeHistoryConfig { max_header_history: 20, max_block_history: 5, max_block_fetchers: 2 };
    let oracle = oracle_with_config(&provider, config);

    let history = oracle.fee_history(50, BlockNumberOrTag::Latest, None).await.unwrap();
    assert_eq!(history.oldest_block, 81);
    assert_eq!(history.len(), 20);

    let history = oracle.fee_history(50, BlockNumberOrTag::Latest, Some(vec![50.])).await.unwrap();
    assert_eq!(history.oldest_block, 96);
    assert_eq!(history.len(), 5);
    assert_eq!(history.reward.unwrap().len(), 5);

    // an empty percentile list is a header-only query
    let history = oracle.fee_history(50, BlockNumberOrTag::Latest, Some(vec![])).await.unwrap();
    assert_eq!(history.len(), 20);
    assert_eq!(history.reward, None);
}

#[tokio::test]
async fn clamped_window_is_reported_as_warning() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(100, |b| b);
    let config = FeeHistoryConfig { max_header_history: 20, ..Default::default() };
    let oracle = oracle_with_config(&provider, config);

    let events = RecordedEvents::default();
    let _guard = tracing::subscriber::set_default(
        gasprice_tracing::tracing_subscriber::registry().with(events.clone()),
    );

    oracle.fee_history(20, BlockNumberOrTag::Latest, None).await.unwrap();
    assert_eq!(events.count(Level::WARN, "rpc::fee_history"), 0);

    let history = oracle.fee_history(50, BlockNumberOrTag::Latest, None).await.unwrap();
    assert_eq!(history.len(), 20);
    assert_eq!(events.count(Level::WARN, "rpc::fee_history"), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn pending_is_served_as_latest() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(10, |b| b);
    let oracle = oracle(&provider);

    let history = oracle.fee_history(3, BlockNumberOrTag::Pending, None).await.unwrap();
    assert_eq!(history.oldest_block, 9);
    assert_eq!(history.len(), 2);

    let history = oracle.fee_history(1, BlockNumberOrTag::Pending, None).await.unwrap();
    assert!(history.is_empty());
    assert!(history.base_fee_per_gas.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn header_fields_in_block_order() {
    let chain_spec = magma_chain();
    let provider = MockFeeHistoryProvider::new(chain_spec.clone());
    let mut rng = rand::thread_rng();
    let lower = chain_spec.kip71.lower_bound_base_fee;
    let upper = chain_spec.kip71.upper_bound_base_fee;
    provider.extend_chain(1337, |b| {
        b.base_fee(rng.gen_range(lower..=upper)).extra_gas_used(rng.gen_range(0..=UPPER_GAS_LIMIT))
    });

    let block_count = 64;
    let config = FeeHistoryConfig { max_block_fetchers: 8, ..Default::default() };
    let oracle = oracle_with_config(&provider, config);
    let history = oracle.fee_history(block_count, 1337.into(), None).await.unwrap();

    let blocks = provider.blocks.lock();
    let window = blocks.range(1337 - block_count + 1..=1337).map(|(_, b)| b).collect::<Vec<_>>();
    let mut base_fees = window
        .iter()
        .map(|b| b.base_fee_per_gas.unwrap_or_default() as u128)
        .collect::<Vec<_>>();
    base_fees.push(chain_spec.next_block_base_fee(&blocks[&1337].header) as u128);
    let ratios = window
        .iter()
        .map(|b| b.gas_used as f64 / UPPER_GAS_LIMIT as f64)
        .collect::<Vec<_>>();

    assert_eq!(history.oldest_block, 1337 - block_count + 1);
    assert_eq!(history.base_fee_per_gas, base_fees);
    assert_eq!(history.gas_used_ratio, ratios);
}

#[tokio::test(flavor = "multi_thread")]
async fn same_result_for_any_number_of_fetchers() {
    let provider = MockFeeHistoryProvider::new(magma_chain());
    provider.extend_chain(300, |b| {
        b.base_fee(25_000_000_000 + random::<u32>() as u64)
            .transactions((0..random::<u8>() % 5).map(|_| 21_000 + random::<u16>() as u64))
    });
    let percentiles = Some(vec![0., 25., 50., 75., 100.]);

    let mut histories = Vec::new();
    for fetchers in [1, 3, 16] {
        let config = FeeHistoryConfig { max_block_fetchers: fetchers, ..Default::default() };
        let oracle = oracle_with_config(&provider, config);
        histories.push(
            oracle.fee_history(100, BlockNumberOrTag::Latest, percentiles.clone()).await.unwrap(),
        );
    }

    assert_eq!(histories[0], histories[1]);
    assert_eq!(histories[0], histories[2]);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_block_fails_request() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(20, |b| b.transactions([21_000]));
    provider.fail_block(18, ProviderError::Database("corrupted".to_string()));
    let oracle = oracle(&provider);

    assert_matches!(
        oracle.fee_history(5, BlockNumberOrTag::Latest, None).await,
        Err(FeeHistoryError::Provider(ProviderError::Database(msg))) if msg == "corrupted"
    );
    assert_matches!(
        oracle.fee_history(5, BlockNumberOrTag::Latest, Some(vec![50.])).await,
        Err(FeeHistoryError::Provider(ProviderError::Database(_)))
    );

    // windows that do not cover the failing block are unaffected
    let history = oracle.fee_history(2, BlockNumberOrTag::Latest, None).await.unwrap();
    assert_eq!(history.oldest_block, 19);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_block_fails_request() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(10, |b| b);
    provider.blocks.lock().remove(&8);
    let oracle = oracle(&provider);

    assert_matches!(
        oracle.fee_history(5, BlockNumberOrTag::Latest, None).await,
        Err(FeeHistoryError::HeaderNotFound(BlockNumberOrTag::Number(8)))
    );
    assert_matches!(
        oracle.fee_history(5, BlockNumberOrTag::Latest, Some(vec![50.])).await,
        Err(FeeHistoryError::BlockNotFound(8))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn head_lookup_failure_fails_request() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(10, |b| b);
    provider.fail_head(ProviderError::Cancelled);
    let oracle = oracle(&provider);

    assert_matches!(
        oracle.fee_history(5, BlockNumberOrTag::Latest, None).await,
        Err(FeeHistoryError::Provider(ProviderError::Cancelled))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_fetchers_sanitized() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(10, |b| b);
    let config = FeeHistoryConfig { max_block_fetchers: 0, ..Default::default() };
    let oracle = oracle_with_config(&provider, config);
    assert_eq!(oracle.config().max_block_fetchers, 1);

    let history = oracle.fee_history(4, BlockNumberOrTag::Latest, None).await.unwrap();
    assert_eq!(history.len(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_chain_has_no_head() {
    let oracle = FeeHistoryOracle::new(NoopProvider::default(), FeeHistoryConfig::default());

    assert_matches!(
        oracle.fee_history(1, BlockNumberOrTag::Latest, None).await,
        Err(FeeHistoryError::HeaderNotFound(BlockNumberOrTag::Latest))
    );
    // pending with a single block never reaches the provider
    assert_eq!(
        oracle.fee_history(1, BlockNumberOrTag::Pending, None).await.unwrap(),
        FeeHistory::default()
    );
}
