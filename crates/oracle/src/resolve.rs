//! Resolution of a requested window against the current chain head.

use crate::error::{FeeHistoryError, FeeHistoryResult};
use gasprice_primitives::{BlockNumber, BlockNumberOrTag};
use gasprice_provider::HeaderProvider;

/// Resolves `newest_block` to an absolute block number and clamps `block_count` so the window
/// does not reach past genesis.
///
/// Returns `(last_block, block_count)`. The window is
/// `last_block + 1 - block_count..=last_block`.
///
/// There is no pending block: [`BlockNumberOrTag::Pending`] is served as
/// [`BlockNumberOrTag::Latest`] with one block less. If that leaves nothing to serve, `(0, 0)`
/// is returned without touching the provider.
///
/// Only fails if the chain head cannot be read or a concrete block above the head is requested.
pub fn resolve_block_range<P: HeaderProvider>(
    provider: &P,
    mut newest_block: BlockNumberOrTag,
    mut block_count: u64,
) -> FeeHistoryResult<(BlockNumber, u64)> {
    if newest_block.is_pending() {
        newest_block = BlockNumberOrTag::Latest;
        block_count = block_count.saturating_sub(1);
        if block_count == 0 {
            return Ok((0, 0))
        }
    }

    let head = provider
        .latest_header()?
        .ok_or(FeeHistoryError::HeaderNotFound(BlockNumberOrTag::Latest))?
        .number;

    let last_block = match newest_block {
        BlockNumberOrTag::Latest | BlockNumberOrTag::Pending => head,
        BlockNumberOrTag::Earliest => 0,
        BlockNumberOrTag::Number(requested) => {
            if requested > head {
                return Err(FeeHistoryError::RequestBeyondHead { requested, head })
            }
            requested
        }
    };

    // ensure not trying to retrieve before genesis
    Ok((last_block, block_count.min(last_block.saturating_add(1))))
}
