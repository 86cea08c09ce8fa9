//! Dummy blocks and data for tests

use gasprice_primitives::{
    keccak256, BlockHash, BlockNumber, Header, Receipt, SealedBlock, Transaction,
};

/// Deterministic hash of the block at the given height.
pub fn block_hash(number: BlockNumber) -> BlockHash {
    keccak256(number.to_be_bytes())
}

/// Builds a block and its receipts from per-transaction gas usage.
#[derive(Debug, Clone, Default)]
pub struct TestBlockBuilder {
    number: BlockNumber,
    base_fee_per_gas: Option<u64>,
    gas_used: Vec<u64>,
    extra_gas_used: u64,
}

impl TestBlockBuilder {
    /// Starts a block at the given height with no transactions.
    pub fn new(number: BlockNumber) -> Self {
        Self { number, ..Default::default() }
    }

    /// Returns the height of the block being built.
    pub const fn number(&self) -> BlockNumber {
        self.number
    }

    /// Sets the base fee recorded in the header.
    pub fn base_fee(mut self, base_fee: u64) -> Self {
        self.base_fee_per_gas = Some(base_fee);
        self
    }

    /// Adds one transaction per entry, consuming the given amount of gas.
    pub fn transactions(mut self, gas_used: impl IntoIterator<Item = u64>) -> Self {
        self.gas_used.extend(gas_used);
        self
    }

    /// Adds gas to the header that is not attributed to any transaction.
    pub fn extra_gas_used(mut self, gas: u64) -> Self {
        self.extra_gas_used = gas;
        self
    }

    /// Builds the sealed block and its receipts.
    pub fn build(self) -> (SealedBlock, Vec<Receipt>) {
        let receipts = Receipt::from_gas_used(self.gas_used.iter().copied());
        let body = (0..self.gas_used.len() as u64)
            .map(|index| Transaction {
                hash: keccak256([self.number.to_be_bytes(), index.to_be_bytes()].concat()),
            })
            .collect();

        let header = Header {
            parent_hash: if self.number == 0 { BlockHash::ZERO } else { block_hash(self.number - 1) },
            number: self.number,
            gas_used: self.gas_used.iter().sum::<u64>() + self.extra_gas_used,
            timestamp: self.number,
            base_fee_per_gas: self.base_fee_per_gas,
        };

        (SealedBlock::new(header.seal(block_hash(self.number)), body), receipts)
    }
}
