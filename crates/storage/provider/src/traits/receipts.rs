use crate::ProviderResult;
use gasprice_primitives::{BlockHash, Receipt};

/// Client trait for fetching [Receipt] data.
#[auto_impl::auto_impl(&, Arc)]
pub trait ReceiptProvider: Send + Sync {
    /// Get the receipts of all transactions in the block with the given hash, in block order.
    ///
    /// Returns `None` if the receipts are not available, for example because they were pruned.
    fn receipts_by_block_hash(&self, hash: BlockHash) -> ProviderResult<Option<Vec<Receipt>>>;
}
