// ============================================================================
// Budget View Library
// Fixed-point money and the budget records built on it
// ============================================================================

//! # Budget View
//!
//! Client-side core for a personal budgeting service.
//!
//! ## Features
//!
//! - **Two-digit fixed-point money** ([`numeric::Money`]) with exact carry/borrow
//!   arithmetic and overflow reporting
//! - **Wire decoding** of the minor-unit integer tokens found in JSON payloads
//! - **Payload decoding** (feature `serde`) that skips records with bad amounts
//!   instead of failing the whole response
//! - **Reports**: checked totals and plain-text listings
//!
//! ## Example
//!
//! ```rust
//! use budget_view::prelude::*;
//!
//! // "123450" on the wire is 1234.50
//! let balance = Money::decode_wire(b"123450").unwrap();
//! assert_eq!(balance.to_string(), "1234.50");
//!
//! let spent = Money::new(34, 75).unwrap();
//! let left = balance.checked_sub(spent).unwrap();
//! assert_eq!(left.to_string(), "1199.75");
//!
//! // Malformed tokens are errors, never zero
//! assert!(Money::decode_wire(b"12.5").is_err());
//! ```

pub mod domain;
pub mod numeric;
#[cfg(feature = "serde")]
pub mod payload;
pub mod report;
#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Account, Budget, Category, ClientConfig, Session};
    pub use crate::numeric::{Money, MoneyError, MoneyResult};
    #[cfg(feature = "serde")]
    pub use crate::payload::{
        decode_accounts, decode_budgets, decode_categories, BudgetList, Decoded, PayloadError,
        SkippedRecord,
    };
    pub use crate::report::{render_report, BudgetSummary};
}
