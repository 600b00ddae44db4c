use anchor_lang::prelude::*;

use library::math::safe_math::*;

use crate::errors::ErrorCodes;
use crate::state::StrategyData;

/// A strategy offered to cover a withdrawal shortfall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PullCandidate {
    pub index: u8,      // strategy index within the vault
    pub available: u64, // min(strategy idle, strategy debt)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pull {
    pub slot: usize, // position of the candidate in the input
    pub amount: u64,
}

/// Linked strategies in the order withdrawals drain them.
pub fn withdraw_queue(strategies: &[StrategyData]) -> Vec<Pubkey> {
    let mut queue: Vec<&StrategyData> = strategies.iter().collect();
    queue.sort_by_key(|data| data.index);
    queue.into_iter().map(|data| data.key).collect()
}

/// The offered strategies must be the head of the withdraw queue, in queue order.
pub fn check_offered_strategies(queue: &[Pubkey], offered: &[Pubkey]) -> Result<()> {
    if offered.len() > queue.len() {
        return err!(ErrorCodes::InvalidAccount);
    }

    for (position, (expected, key)) in queue.iter().zip(offered).enumerate() {
        if expected != key {
            msg!("strategy {} offered where queue position {} is {}", key, position, expected);
            return err!(ErrorCodes::InvalidAccount);
        }
    }

    Ok(())
}

/// Covers `shortfall` from candidates, lowest strategy index first.
///
/// An uncovered shortfall fails with `InsufficientLiquidity` once the whole queue was offered,
/// and with `InvalidAccount` while strategies were left out.
pub fn plan_withdrawal(
    shortfall: u64,
    candidates: &[PullCandidate],
    queue_complete: bool,
) -> Result<Vec<Pull>> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&slot| candidates[slot].index);

    let mut remaining = shortfall;
    let mut pulls = Vec::new();

    for slot in order {
        if remaining == 0 {
            break;
        }

        let amount = remaining.min(candidates[slot].available);
        if amount == 0 {
            continue;
        }

        pulls.push(Pull { slot, amount });
        remaining = remaining.safe_sub(amount)?;
    }

    if remaining > 0 {
        msg!("withdrawal short by {} after strategies", remaining);
        if !queue_complete {
            return err!(ErrorCodes::InvalidAccount);
        }
        return err!(ErrorCodes::InsufficientLiquidity);
    }

    Ok(pulls)
}
