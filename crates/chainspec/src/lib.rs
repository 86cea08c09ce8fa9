//! The chain specification consumed by the gas price oracle.
//!
//! A [`ChainSpec`] is immutable once built: it describes when the dynamic fee mechanism
//! (the Magma hardfork) activates, the fixed unit price charged before that, the governance
//! parameters that drive the base fee, and the fixed per-block gas ceiling.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod base_fee;
mod spec;

pub use base_fee::next_magma_block_base_fee;
pub use spec::{ChainSpec, ChainSpecBuilder, Kip71Params};
