// ============================================================================
// Money Errors
// Error types for decoding and fixed-point money arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while decoding or operating on [`Money`](super::Money).
///
/// `Empty` and `InvalidDigit` are decode failures: the caller decides whether to
/// abort, skip the record or substitute a sentinel. `Overflow` is raised instead
/// of wrapping the whole-unit part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum MoneyError {
    /// Token had no digits (empty, or a bare sign)
    #[error("invalid amount: token has no digits")]
    Empty,

    /// Token contained something other than an optional leading minus and digits
    #[error("invalid amount {token:?}: unexpected character at byte {position}")]
    InvalidDigit { token: String, position: usize },

    /// Minor part outside [0, 100)
    #[error("minor units out of range: {0} (expected 0..=99)")]
    MinorOutOfRange(u8),

    /// Whole-unit part left the i64 range
    #[error("arithmetic overflow: whole units exceeded the representable range")]
    Overflow,

    /// Conversion would drop digits below the cent
    #[error("precision loss: amount has more than two fractional digits")]
    PrecisionLoss,
}

impl MoneyError {
    /// True for the failures that come from a malformed input token.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, MoneyError::Empty | MoneyError::InvalidDigit { .. })
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
