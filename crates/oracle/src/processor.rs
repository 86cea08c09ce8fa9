//! Derivation of per-block fee data.

use crate::types::ProcessedFees;
use gasprice_chainspec::ChainSpec;
use gasprice_primitives::{constants::ZERO_BASE_FEE, Header, Receipt, SealedBlock};
use tracing::error;

/// Gas used by a transaction paired with the fee per gas it paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TxGasAndReward {
    gas_used: u64,
    reward: u128,
}

/// Computes the fee data of a single block.
///
/// `block` and `receipts` are only consulted if `percentiles` is non-empty. If they are needed
/// but unavailable, the anomaly is logged and [`ProcessedFees::rewards`] is left empty while
/// the header derived fields are still filled in.
pub fn process_block(
    chain_spec: &ChainSpec,
    header: &Header,
    block: Option<&SealedBlock>,
    receipts: Option<&[Receipt]>,
    percentiles: &[f64],
) -> ProcessedFees {
    let base_fee = header.base_fee_per_gas.unwrap_or(ZERO_BASE_FEE);
    let next_base_fee = if chain_spec.is_magma_active_at_block(header.number.saturating_add(1)) {
        chain_spec.next_block_base_fee(header)
    } else {
        ZERO_BASE_FEE
    };

    // blocks have no individual gas limit, the ratio is relative to the protocol ceiling
    let gas_used_ratio = header.gas_used as f64 / chain_spec.upper_gas_limit as f64;

    let mut fees = ProcessedFees {
        rewards: None,
        base_fee: base_fee as u128,
        next_base_fee: next_base_fee as u128,
        gas_used_ratio,
    };

    if percentiles.is_empty() {
        return fees
    }

    let Some(block) = block else {
        error!(
            target: "rpc::fee_history",
            number = header.number,
            "Block is missing while reward percentiles are requested"
        );
        return fees
    };

    let transactions = block.transactions();
    if transactions.is_empty() {
        // all zero row if there are no transactions to gather data from
        fees.rewards = Some(vec![0; percentiles.len()]);
        return fees
    }

    match receipts {
        Some(receipts) if receipts.len() == transactions.len() => {
            let reward = header
                .base_fee_per_gas
                .map(u128::from)
                .unwrap_or(chain_spec.unit_price as u128);
            fees.rewards = Some(calculate_reward_percentiles(
                percentiles,
                header.gas_used,
                receipts.iter().map(|receipt| (receipt.gas_used, reward)),
            ));
        }
        receipts => {
            error!(
                target: "rpc::fee_history",
                number = header.number,
                txs = transactions.len(),
                receipts = receipts.map(<[Receipt]>::len),
                "Receipts are missing while reward percentiles are requested"
            );
        }
    }

    fees
}

/// Calculates the gas weighted reward at each of the given percentiles.
///
/// `samples` yields the gas used and the effective reward of each transaction of the block.
/// `percentiles` must be sorted in nondecreasing order and lie within `[0, 100]`.
///
/// The samples are sorted by reward, ties keep their block order. For each percentile the
/// reward of the first sample at which the cumulative gas used reaches
/// `block_gas_used * percentile / 100` is selected, or the reward of the last sample if the
/// threshold is never reached.
pub fn calculate_reward_percentiles(
    percentiles: &[f64],
    block_gas_used: u64,
    samples: impl IntoIterator<Item = (u64, u128)>,
) -> Vec<u128> {
    let mut transactions = samples
        .into_iter()
        .map(|(gas_used, reward)| TxGasAndReward { gas_used, reward })
        .collect::<Vec<_>>();

    if transactions.is_empty() {
        return vec![0; percentiles.len()]
    }

    // Sort the transactions by their rewards in ascending order
    transactions.sort_by_key(|tx| tx.reward);

    // The index is shared across all percentiles since they are nondecreasing.
    let mut tx_index = 0;
    let mut cumulative_gas_used = transactions[0].gas_used;
    let mut rewards_in_block = Vec::with_capacity(percentiles.len());
    for percentile in percentiles {
        let threshold = (block_gas_used as f64 * percentile / 100.) as u64;
        while cumulative_gas_used < threshold && tx_index < transactions.len() - 1 {
            tx_index += 1;
            cumulative_gas_used += transactions[tx_index].gas_used;
        }
        rewards_in_block.push(transactions[tx_index].reward);
    }

    rewards_in_block
}
