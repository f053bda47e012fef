// ============================================================================
// Utilities Module
// Logging bootstrap for binaries and demos
// ============================================================================

/// Install a `tracing-subscriber` formatter as the global default.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(max_level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init()
        .is_ok()
}
