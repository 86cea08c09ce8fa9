use crate::base_fee::next_magma_block_base_fee;
use gasprice_primitives::{
    constants::{DEFAULT_UNIT_PRICE, STON_TO_PEB, UPPER_GAS_LIMIT},
    BlockNumber, Header,
};
use serde::{Deserialize, Serialize};

/// Governance parameters of the dynamic base fee (KIP-71).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kip71Params {
    /// The base fee never drops below this value.
    pub lower_bound_base_fee: u64,
    /// The base fee never rises above this value.
    pub upper_bound_base_fee: u64,
    /// Gas used per block at which the base fee stays constant.
    pub gas_target: u64,
    /// Parent gas usage is capped at this value before computing the next base fee.
    pub max_block_gas_used_for_base_fee: u64,
    /// Bounds the amount the base fee can change between blocks.
    pub base_fee_denominator: u64,
}

impl Default for Kip71Params {
    fn default() -> Self {
        Self {
            lower_bound_base_fee: 25 * STON_TO_PEB,
            upper_bound_base_fee: 750 * STON_TO_PEB,
            gas_target: 30_000_000,
            max_block_gas_used_for_base_fee: 60_000_000,
            base_fee_denominator: 20,
        }
    }
}

/// An immutable chain specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainSpec {
    /// The chain id.
    pub chain_id: u64,
    /// Fee per gas charged while the fixed unit price regime is active.
    pub unit_price: u64,
    /// First block at which the Magma hardfork (dynamic base fee) is active.
    ///
    /// `None` if the fork is never activated.
    pub magma_block: Option<BlockNumber>,
    /// Fixed per-block gas ceiling.
    pub upper_gas_limit: u64,
    /// Base fee governance parameters.
    pub kip71: Kip71Params,
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self {
            chain_id: 1001,
            unit_price: DEFAULT_UNIT_PRICE,
            magma_block: None,
            upper_gas_limit: UPPER_GAS_LIMIT,
            kip71: Kip71Params::default(),
        }
    }
}

impl ChainSpec {
    /// Returns a new [`ChainSpecBuilder`].
    pub fn builder() -> ChainSpecBuilder {
        ChainSpecBuilder::default()
    }

    /// Returns `true` if the Magma hardfork is active at the given block.
    #[inline]
    pub fn is_magma_active_at_block(&self, number: BlockNumber) -> bool {
        self.magma_block.is_some_and(|activation| number >= activation)
    }

    /// Computes the base fee of the block following `parent`.
    ///
    /// Only meaningful if the Magma hardfork is active at `parent.number + 1`.
    pub fn next_block_base_fee(&self, parent: &Header) -> u64 {
        next_magma_block_base_fee(parent, self.is_magma_active_at_block(parent.number), &self.kip71)
    }
}

/// A helper to build custom chain specs.
#[derive(Debug, Default, Clone)]
pub struct ChainSpecBuilder {
    spec: ChainSpec,
}

impl ChainSpecBuilder {
    /// Sets the chain id.
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.spec.chain_id = chain_id;
        self
    }

    /// Sets the fixed unit price.
    pub fn unit_price(mut self, unit_price: u64) -> Self {
        self.spec.unit_price = unit_price;
        self
    }

    /// Activates the Magma hardfork at the given block.
    pub fn magma_activated_at(mut self, block: BlockNumber) -> Self {
        self.spec.magma_block = Some(block);
        self
    }

    /// Sets the fixed per-block gas ceiling.
    pub fn upper_gas_limit(mut self, limit: u64) -> Self {
        self.spec.upper_gas_limit = limit;
        self
    }

    /// Sets the base fee governance parameters.
    pub fn kip71(mut self, params: Kip71Params) -> Self {
        self.spec.kip71 = params;
        self
    }

    /// Build the resulting [`ChainSpec`].
    pub fn build(self) -> ChainSpec {
        self.spec
    }
}
