use crate::{magma_chain, oracle};
use gasprice_chainspec::ChainSpec;
use gasprice_primitives::BlockNumberOrTag;
use gasprice_provider::test_utils::{MockFeeHistoryProvider, TestBlockBuilder};

#[tokio::test(flavor = "multi_thread")]
async fn head_at_one_hundred() {
    let provider = MockFeeHistoryProvider::new(magma_chain());
    provider.extend_chain(100, |b| {
        let base_fee = 25_000_000_000 + b.number() * 1_000;
        b.base_fee(base_fee).transactions([21_000, 100_000, 50_000])
    });
    let oracle = oracle(&provider);

    let history =
        oracle.fee_history(3, BlockNumberOrTag::Latest, Some(vec![10., 50., 90.])).await.unwrap();

    assert_eq!(history.oldest_block, 98);
    assert_eq!(history.gas_used_ratio.len(), 3);
    assert_eq!(history.base_fee_per_gas.len(), 4);

    let reward = history.reward.unwrap();
    assert_eq!(reward.len(), 3);
    for (row, number) in reward.iter().zip(98u64..) {
        let row = row.as_ref().unwrap();
        assert_eq!(row.len(), 3);
        assert!(row.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(row[0], 25_000_000_000 + number as u128 * 1_000);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_blocks_have_zero_rows() {
    let provider = MockFeeHistoryProvider::new(magma_chain());
    provider.extend_chain(10, |b| b.base_fee(25_000_000_000));
    let oracle = oracle(&provider);

    let percentiles = vec![0., 50., 100.];
    let history =
        oracle.fee_history(4, BlockNumberOrTag::Latest, Some(percentiles.clone())).await.unwrap();
    assert_eq!(history.reward, Some(vec![Some(vec![0; percentiles.len()]); 4]));
    assert!(history.base_fee_per_gas.iter().all(|fee| *fee > 0));
}

#[tokio::test(flavor = "multi_thread")]
async fn single_transaction_identical_rewards() {
    let chain_spec = ChainSpec::builder().unit_price(7).build();
    let provider = MockFeeHistoryProvider::new(chain_spec);
    provider.extend_chain(10, |b| b.transactions([60_000]));
    let oracle = oracle(&provider);

    let history = oracle
        .fee_history(2, BlockNumberOrTag::Latest, Some(vec![1., 20., 99.9, 100.]))
        .await
        .unwrap();
    // no base fee recorded, rewards fall back to the unit price
    assert_eq!(history.reward, Some(vec![Some(vec![7; 4]); 2]));
    assert_eq!(history.base_fee_per_gas, vec![0; 3]);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_receipts_degrade_single_block() {
    let provider = MockFeeHistoryProvider::new(magma_chain());
    provider.extend_chain(10, |b| b.base_fee(30_000_000_000).transactions([21_000, 42_000]));
    provider.drop_receipts(9);
    let oracle = oracle(&provider);

    let history =
        oracle.fee_history(3, BlockNumberOrTag::Latest, Some(vec![25., 75.])).await.unwrap();

    assert_eq!(
        history.reward,
        Some(vec![
            Some(vec![30_000_000_000, 30_000_000_000]),
            None,
            Some(vec![30_000_000_000, 30_000_000_000]),
        ])
    );
    let json = serde_json::to_value(&history).unwrap();
    assert_eq!(json["reward"][1], serde_json::Value::Null);
    assert!(!json.to_string().contains("[]"));
    // header derived data of the degraded block is still reported
    assert_eq!(history.base_fee_per_gas[1], 30_000_000_000);
    assert_eq!(history.gas_used_ratio[1], history.gas_used_ratio[0]);
}

#[tokio::test(flavor = "multi_thread")]
async fn receipts_are_not_needed_without_percentiles() {
    let provider = MockFeeHistoryProvider::default();
    provider.extend_chain(5, |b| b.transactions([21_000]));
    for number in 0..=5 {
        provider.drop_receipts(number);
    }
    let oracle = oracle(&provider);

    let history = oracle.fee_history(3, BlockNumberOrTag::Latest, None).await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history.reward, None);
    // one head lookup plus one header lookup per block
    assert_eq!(provider.calls(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn rewards_follow_block_contents() {
    let provider = MockFeeHistoryProvider::default();
    let (empty, empty_receipts) = TestBlockBuilder::new(0).build();
    let (busy, busy_receipts) =
        TestBlockBuilder::new(1).base_fee(40).transactions([10_000, 30_000, 60_000]).build();
    provider.add_block(empty, Some(empty_receipts));
    provider.add_block(busy, Some(busy_receipts));
    let oracle = oracle(&provider);

    let history =
        oracle.fee_history(2, BlockNumberOrTag::Latest, Some(vec![0., 100.])).await.unwrap();
    assert_eq!(history.oldest_block, 0);
    assert_eq!(history.reward, Some(vec![Some(vec![0, 0]), Some(vec![40, 40])]));
    assert_eq!(history.base_fee_per_gas, vec![0, 40, 0]);
}
