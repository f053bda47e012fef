// ============================================================================
// Domain Models Module
// Budget resource records and the client session handle
// ============================================================================

pub mod config;
pub mod records;

pub use config::{ClientConfig, Session};
pub use records::{Account, Budget, Category};
