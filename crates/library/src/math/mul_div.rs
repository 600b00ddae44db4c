use crate::errors::{ErrorCodes, LibraryResult};
use crate::math::{casting::*, safe_math::*};

/// `value * numerator / denominator` with a u128 intermediate, rounded down.
///
/// Every share/asset conversion goes through here so rounding always favours the
/// vault over the caller.
pub fn mul_div(value: u64, numerator: u64, denominator: u64) -> LibraryResult<u64> {
    if denominator == 0 {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }

    value
        .cast::<u128>()?
        .safe_mul(numerator.cast()?)?
        .safe_div(denominator.cast()?)?
        .cast::<u64>()
}

/// Same as [`mul_div`] but rounded up.
pub fn mul_div_ceil(value: u64, numerator: u64, denominator: u64) -> LibraryResult<u64> {
    if denominator == 0 {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }

    value
        .cast::<u128>()?
        .safe_mul(numerator.cast()?)?
        .safe_div_ceil(denominator.cast()?)?
        .cast::<u64>()
}
