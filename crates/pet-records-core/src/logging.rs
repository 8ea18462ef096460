//! Logging setup for host apps that do not install their own subscriber.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Parse a `tracing` filter directive such as `"info"` or
/// `"pet_records_core=debug,warn"`.
pub fn parse_filter(filter: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(filter)
}

/// Install a global fmt subscriber filtered by `filter`.
///
/// Fails if `filter` does not parse. Returns `Ok(false)` when a subscriber is
/// already installed (by the host app or a previous call); the existing one
/// is left in place.
pub fn init_logging(filter: &str) -> Result<bool, ParseError> {
    let env_filter = parse_filter(filter)?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok())
}
