use serde::{Deserialize, Serialize};

/// Receipt containing the result of a transaction execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Whether the transaction executed successfully.
    pub success: bool,
    /// Gas consumed by this transaction alone.
    pub gas_used: u64,
    /// Gas consumed by this and all preceding transactions of the block.
    pub cumulative_gas_used: u64,
}

impl Receipt {
    /// Builds receipts for transactions that consumed the given amounts of gas, in block order.
    pub fn from_gas_used(gas_used: impl IntoIterator<Item = u64>) -> Vec<Self> {
        gas_used
            .into_iter()
            .scan(0u64, |cumulative, gas_used| {
                *cumulative += gas_used;
                Some(Self { success: true, gas_used, cumulative_gas_used: *cumulative })
            })
            .collect()
    }
}
