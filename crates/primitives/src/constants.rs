//! Protocol constants.

/// The fixed upper bound on gas a single block may consume.
///
/// Blocks carry no configurable gas limit, so gas usage ratios are computed against this value.
pub const UPPER_GAS_LIMIT: u64 = 999_999_999_999;

/// Base fee reported for blocks at heights where the dynamic fee mechanism is not active.
pub const ZERO_BASE_FEE: u64 = 0;

/// Multiplier to convert ston to peb.
pub const STON_TO_PEB: u64 = 1_000_000_000;

/// Unit price charged per gas under the fixed price regime: 25 ston.
pub const DEFAULT_UNIT_PRICE: u64 = 25 * STON_TO_PEB;
