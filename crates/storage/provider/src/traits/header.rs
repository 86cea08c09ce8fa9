use crate::ProviderResult;
use gasprice_primitives::{BlockNumber, SealedHeader};

/// Client trait for fetching `Header` related data.
#[auto_impl::auto_impl(&, Arc)]
pub trait HeaderProvider: Send + Sync {
    /// Get the header of the current chain head.
    fn latest_header(&self) -> ProviderResult<Option<SealedHeader>>;

    /// Get header by block number
    fn header_by_number(&self, num: BlockNumber) -> ProviderResult<Option<SealedHeader>>;

    /// Returns the number of the current chain head, if any block is known.
    fn best_block_number(&self) -> ProviderResult<Option<BlockNumber>> {
        Ok(self.latest_header()?.map(|header| header.number))
    }
}
