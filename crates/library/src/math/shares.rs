use crate::errors::{ErrorCodes, LibraryResult};
use crate::math::mul_div::mul_div;

/// Shares minted for `assets` at the current price. The first depositor mints 1:1.
pub fn convert_to_shares(assets: u64, total_shares: u64, total_assets: u64) -> LibraryResult<u64> {
    if total_shares == 0 {
        return Ok(assets);
    }

    if total_assets == 0 {
        // outstanding shares backed by nothing, pricing is undefined
        return Err(ErrorCodes::LibraryDivisionByZero);
    }

    mul_div(assets, total_shares, total_assets)
}

/// Assets redeemable for `shares` at the current price.
pub fn convert_to_assets(shares: u64, total_shares: u64, total_assets: u64) -> LibraryResult<u64> {
    if total_shares == 0 {
        return Ok(0);
    }

    mul_div(shares, total_assets, total_shares)
}
