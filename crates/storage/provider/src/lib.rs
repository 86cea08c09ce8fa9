//! Provider traits the gas price oracle reads chain data through.
//!
//! All lookups are synchronous and fallible: `Ok(None)` means the requested item is not known to
//! the backend, `Err` means the lookup itself failed.
//!
//! ## Feature Flags
//!
//! - `test-utils`: Export utilities for testing

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{ProviderError, ProviderResult};

mod traits;
pub use traits::{
    BlockProvider, ChainSpecProvider, FeeHistoryProvider, HeaderProvider, ReceiptProvider,
};

#[cfg(any(test, feature = "test-utils"))]
/// Common test helpers for mocking the Provider.
pub mod test_utils;
