use crate::{BlockHash, BlockNumber};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Block header.
///
/// Only the fields the fee oracle reads are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// The hash of the parent block.
    pub parent_hash: BlockHash,
    /// Height of this block. Genesis is `0`.
    pub number: BlockNumber,
    /// Total gas consumed by the transactions of this block.
    pub gas_used: u64,
    /// Block timestamp, in seconds.
    pub timestamp: u64,
    /// Fee per gas charged in this block.
    ///
    /// `None` for blocks mined before the dynamic fee mechanism was activated.
    pub base_fee_per_gas: Option<u64>,
}

impl Header {
    /// Seal the header with a known hash.
    ///
    /// WARNING: This method does not perform validation whether the hash is correct.
    #[inline]
    pub const fn seal(self, hash: BlockHash) -> SealedHeader {
        SealedHeader { header: self, hash }
    }
}

/// A [`Header`] paired with its block hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedHeader {
    /// Locked header fields.
    header: Header,
    /// Locked header hash.
    hash: BlockHash,
}

impl SealedHeader {
    /// Returns the block hash.
    #[inline]
    pub const fn hash(&self) -> BlockHash {
        self.hash
    }

    /// Returns a reference to the inner header.
    #[inline]
    pub const fn header(&self) -> &Header {
        &self.header
    }
}

impl Deref for SealedHeader {
    type Target = Header;

    fn deref(&self) -> &Self::Target {
        &self.header
    }
}
