//! A provider that knows no blocks.

use crate::{BlockProvider, ChainSpecProvider, HeaderProvider, ProviderResult, ReceiptProvider};
use gasprice_chainspec::ChainSpec;
use gasprice_primitives::{BlockHash, BlockNumber, Receipt, SealedBlock, SealedHeader};
use std::sync::Arc;

/// Supports various api interfaces for testing purposes.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct NoopProvider {
    chain_spec: Arc<ChainSpec>,
}

impl HeaderProvider for NoopProvider {
    fn latest_header(&self) -> ProviderResult<Option<SealedHeader>> {
        Ok(None)
    }

    fn header_by_number(&self, _num: BlockNumber) -> ProviderResult<Option<SealedHeader>> {
        Ok(None)
    }
}

impl BlockProvider for NoopProvider {
    fn block_by_number(&self, _num: BlockNumber) -> ProviderResult<Option<SealedBlock>> {
        Ok(None)
    }
}

impl ReceiptProvider for NoopProvider {
    fn receipts_by_block_hash(&self, _hash: BlockHash) -> ProviderResult<Option<Vec<Receipt>>> {
        Ok(None)
    }
}

impl ChainSpecProvider for NoopProvider {
    fn chain_spec(&self) -> Arc<ChainSpec> {
        self.chain_spec.clone()
    }
}
