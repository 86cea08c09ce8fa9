pub mod blocks;
mod mock;
mod noop;

pub use blocks::TestBlockBuilder;
pub use mock::MockFeeHistoryProvider;
pub use noop::NoopProvider;
