// ============================================================================
// Numeric Module
// Two-digit fixed-point money for budget amounts
// ============================================================================
//
// This module provides:
// - Money: whole units plus minor units (cents) in [0, 100)
// - MoneyError: decode and arithmetic failures
// - Wire codec for the minor-unit integer tokens found in JSON payloads
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics, no wraparound)
// - The value of a Money is always exactly whole + minor / 100

mod errors;
mod money;
mod wire;

pub use errors::{MoneyError, MoneyResult};
pub use money::Money;
