//! Collection of common provider traits.

mod block;
pub use block::BlockProvider;

mod chain_spec;
pub use chain_spec::ChainSpecProvider;

mod header;
pub use header::HeaderProvider;

mod receipts;
pub use receipts::ReceiptProvider;

mod full;
pub use full::FeeHistoryProvider;
