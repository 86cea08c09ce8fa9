use gasprice_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

/// Fee data of a window of consecutive blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeHistory {
    /// Lowest number block of the returned range.
    pub oldest_block: BlockNumber,
    /// Base fee per gas of every block in the window, followed by the projected base fee of the
    /// block after the newest one.
    pub base_fee_per_gas: Vec<u128>,
    /// Gas used divided by the fixed block gas ceiling, per block.
    pub gas_used_ratio: Vec<f64>,
    /// Effective reward at each requested percentile, per block.
    ///
    /// `None` if no percentiles were requested. The row of a block whose body or receipts were
    /// unavailable is `None`, every other row has one entry per requested percentile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<Vec<Option<Vec<u128>>>>,
}

impl FeeHistory {
    /// Returns the number of blocks covered.
    pub fn len(&self) -> usize {
        self.gas_used_ratio.len()
    }

    /// Returns `true` if no block is covered.
    pub fn is_empty(&self) -> bool {
        self.gas_used_ratio.is_empty()
    }
}

/// Fee data derived from a single block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedFees {
    /// Effective reward at each requested percentile.
    ///
    /// `None` if no percentiles were requested or the block data needed to compute them was
    /// missing.
    pub rewards: Option<Vec<u128>>,
    /// Fee per gas charged in this block.
    pub base_fee: u128,
    /// Fee per gas that applies to the next block.
    pub next_base_fee: u128,
    /// Gas used divided by the fixed block gas ceiling.
    pub gas_used_ratio: f64,
}
