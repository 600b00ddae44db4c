/// Fee rates are expressed in basis points, 10_000 = 100%
pub const MAX_BPS: u64 = 10_000;

/// @dev Ignoring leap years
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;
