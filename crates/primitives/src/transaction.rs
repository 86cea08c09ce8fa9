use crate::TxHash;
use serde::{Deserialize, Serialize};

/// A transaction included in a block.
///
/// Rewards are derived from the block base fee and the gas used recorded in the receipts, so only
/// the hash is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction hash.
    pub hash: TxHash,
}
