use crate::{
    test_utils::TestBlockBuilder, BlockProvider, ChainSpecProvider, HeaderProvider,
    ProviderError, ProviderResult, ReceiptProvider,
};
use gasprice_chainspec::ChainSpec;
use gasprice_primitives::{BlockHash, BlockNumber, Receipt, SealedBlock, SealedHeader};
use parking_lot::Mutex;
use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

/// A mock implementation of the provider traits backed by in-memory maps.
///
/// Lookups for blocks registered with [`MockFeeHistoryProvider::fail_block`] return the
/// configured error, and every lookup bumps a call counter.
#[derive(Debug, Clone)]
pub struct MockFeeHistoryProvider {
    /// Canonical blocks by number
    pub blocks: Arc<Mutex<BTreeMap<BlockNumber, SealedBlock>>>,
    /// Receipts by block hash
    pub receipts: Arc<Mutex<HashMap<BlockHash, Vec<Receipt>>>>,
    /// Injected lookup failures by block number
    pub failures: Arc<Mutex<HashMap<BlockNumber, ProviderError>>>,
    /// Injected failure of the chain head lookup
    pub head_failure: Arc<Mutex<Option<ProviderError>>>,
    /// Chain spec
    pub chain_spec: Arc<ChainSpec>,
    calls: Arc<AtomicUsize>,
}

impl Default for MockFeeHistoryProvider {
    fn default() -> Self {
        Self::new(ChainSpec::default())
    }
}

impl MockFeeHistoryProvider {
    /// Creates an empty provider for the given chain.
    pub fn new(chain_spec: ChainSpec) -> Self {
        Self {
            blocks: Default::default(),
            receipts: Default::default(),
            failures: Default::default(),
            head_failure: Default::default(),
            chain_spec: Arc::new(chain_spec),
            calls: Default::default(),
        }
    }

    /// Add a block and, if given, its receipts.
    pub fn add_block(&self, block: SealedBlock, receipts: Option<Vec<Receipt>>) {
        if let Some(receipts) = receipts {
            self.receipts.lock().insert(block.hash(), receipts);
        }
        self.blocks.lock().insert(block.number, block);
    }

    /// Add multiple blocks together with their receipts.
    pub fn extend_blocks(&self, iter: impl IntoIterator<Item = (SealedBlock, Vec<Receipt>)>) {
        for (block, receipts) in iter {
            self.add_block(block, Some(receipts));
        }
    }

    /// Fills the chain from genesis up to and including `head` using `f` to shape each block.
    pub fn extend_chain(
        &self,
        head: BlockNumber,
        mut f: impl FnMut(TestBlockBuilder) -> TestBlockBuilder,
    ) {
        self.extend_blocks((0..=head).map(|number| f(TestBlockBuilder::new(number)).build()));
    }

    /// Makes every lookup of the block at `number` fail with `error`.
    pub fn fail_block(&self, number: BlockNumber, error: ProviderError) {
        self.failures.lock().insert(number, error);
    }

    /// Makes the chain head lookup fail with `error`.
    pub fn fail_head(&self, error: ProviderError) {
        *self.head_failure.lock() = Some(error);
    }

    /// Removes the receipts of the block at `number`, as if they had been pruned.
    pub fn drop_receipts(&self, number: BlockNumber) {
        if let Some(hash) = self.blocks.lock().get(&number).map(SealedBlock::hash) {
            self.receipts.lock().remove(&hash);
        }
    }

    /// Returns the number of lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_failure(&self, number: BlockNumber) -> ProviderResult<()> {
        match self.failures.lock().get(&number) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl HeaderProvider for MockFeeHistoryProvider {
    fn latest_header(&self) -> ProviderResult<Option<SealedHeader>> {
        self.record_call();
        if let Some(err) = self.head_failure.lock().clone() {
            return Err(err)
        }
        Ok(self.blocks.lock().last_key_value().map(|(_, block)| block.header.clone()))
    }

    fn header_by_number(&self, num: BlockNumber) -> ProviderResult<Option<SealedHeader>> {
        self.record_call();
        self.check_failure(num)?;
        Ok(self.blocks.lock().get(&num).map(|block| block.header.clone()))
    }
}

impl BlockProvider for MockFeeHistoryProvider {
    fn block_by_number(&self, num: BlockNumber) -> ProviderResult<Option<SealedBlock>> {
        self.record_call();
        self.check_failure(num)?;
        Ok(self.blocks.lock().get(&num).cloned())
    }
}

impl ReceiptProvider for MockFeeHistoryProvider {
    fn receipts_by_block_hash(&self, hash: BlockHash) -> ProviderResult<Option<Vec<Receipt>>> {
        self.record_call();
        Ok(self.receipts.lock().get(&hash).cloned())
    }
}

impl ChainSpecProvider for MockFeeHistoryProvider {
    fn chain_spec(&self) -> Arc<ChainSpec> {
        self.chain_spec.clone()
    }
}
