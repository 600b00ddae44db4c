use anchor_lang::prelude::*;

use access_control::{state::Role, utils::check_role};
use library::math::safe_math::*;

use crate::errors::ErrorCodes;
use crate::state::{InvestTracker, Strategy};
use crate::ID;

/// Keeper operations accept the strategy's manager or a holder of `role`.
pub fn check_keeper_or_role(
    strategy: &Strategy,
    signer: &Pubkey,
    roles: &AccountInfo,
    role: Role,
) -> Result<()> {
    if strategy.is_keeper(signer) {
        return Ok(());
    }

    check_role(roles, signer, role)
}

/// Sums the accrued value of every tracker of `strategy`. `tracker_accounts` must list each
/// tracker exactly once, in `strategy.trackers` order.
pub fn deployed_value(
    strategy_key: &Pubkey,
    strategy: &Strategy,
    tracker_accounts: &[AccountInfo],
) -> Result<u64> {
    if tracker_accounts.len() != strategy.trackers.len() {
        msg!(
            "expected {} trackers, got {}",
            strategy.trackers.len(),
            tracker_accounts.len()
        );
        return err!(ErrorCodes::InvalidAccount);
    }

    let mut total: u64 = 0;

    for (account, asset_mint) in tracker_accounts.iter().zip(strategy.trackers.iter()) {
        if account.owner != &ID {
            return err!(ErrorCodes::InvalidAccount);
        }

        let data = account.try_borrow_data()?;
        let tracker = InvestTracker::try_deserialize(&mut &data[..])?;

        if tracker.strategy != *strategy_key || tracker.asset_mint != *asset_mint {
            return err!(ErrorCodes::InvalidAccount);
        }

        total = total.safe_add(tracker.accrued_value)?;
    }

    Ok(total)
}
