//! Helper provider traits to encapsulate all provider traits for simplicity.

use crate::{BlockProvider, ChainSpecProvider, HeaderProvider, ReceiptProvider};

/// Helper trait to unify all provider traits the fee history oracle reads through.
pub trait FeeHistoryProvider:
    HeaderProvider + BlockProvider + ReceiptProvider + ChainSpecProvider + 'static
{
}

impl<T> FeeHistoryProvider for T where
    T: HeaderProvider + BlockProvider + ReceiptProvider + ChainSpecProvider + 'static
{
}
