use crate::ProviderResult;
use gasprice_primitives::{BlockNumber, SealedBlock};

/// Api trait for fetching full blocks, header and body.
#[auto_impl::auto_impl(&, Arc)]
pub trait BlockProvider: Send + Sync {
    /// Returns the block with the given number, including its transactions.
    ///
    /// Returns `None` if the block is not found.
    fn block_by_number(&self, num: BlockNumber) -> ProviderResult<Option<SealedBlock>>;
}
