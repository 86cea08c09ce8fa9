//! The Magma base fee rule (KIP-71).

use crate::Kip71Params;
use gasprice_primitives::Header;

/// Calculates the base fee of the block following `parent` under the Magma rule.
///
/// If the parent is genesis, was mined before Magma, or carries no base fee, the next block
/// starts at the lower bound. Otherwise the base fee moves towards the gas target by at most
/// `1 / base_fee_denominator` of the parent base fee, and is clamped to the governance bounds.
/// An increase is always at least one unit.
pub fn next_magma_block_base_fee(parent: &Header, parent_is_magma: bool, params: &Kip71Params) -> u64 {
    let lower_bound = params.lower_bound_base_fee;
    let upper_bound = params.upper_bound_base_fee;

    let parent_base_fee = match parent.base_fee_per_gas {
        Some(base_fee) if parent_is_magma && parent.number != 0 => base_fee,
        _ => return lower_bound,
    };

    let denominator = params.base_fee_denominator.max(1) as u128;
    let gas_target = params.gas_target;
    let gas_used = parent.gas_used.min(params.max_block_gas_used_for_base_fee);

    if gas_used == gas_target || gas_target == 0 {
        return parent_base_fee
    }

    if gas_used > gas_target {
        let gas_used_delta = (gas_used - gas_target) as u128;
        let delta = (parent_base_fee as u128 * gas_used_delta / gas_target as u128 / denominator)
            .max(1);
        let next = (parent_base_fee as u128).saturating_add(delta);
        next.min(upper_bound as u128) as u64
    } else {
        let gas_used_delta = (gas_target - gas_used) as u128;
        let delta = parent_base_fee as u128 * gas_used_delta / gas_target as u128 / denominator;
        let next = (parent_base_fee as u128).saturating_sub(delta);
        next.max(lower_bound as u128) as u64
    }
}
