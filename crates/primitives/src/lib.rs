//! Commonly used types of the gas price oracle.
//!
//! This crate contains the block, header, transaction and receipt types the oracle reads from its
//! backend, together with the protocol constants that shape fee calculations.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod block;
pub mod constants;
mod header;
mod receipt;
mod transaction;

pub use block::{
    BlockNumberOrTag, HexStringMissingPrefixError, ParseBlockNumberError, SealedBlock,
};
pub use header::{Header, SealedHeader};
pub use receipt::Receipt;
pub use transaction::Transaction;

pub use alloy_primitives::{keccak256, B256};

/// A block hash.
pub type BlockHash = B256;
/// A block number.
pub type BlockNumber = u64;
/// A transaction hash.
pub type TxHash = B256;
