use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;

use library::math::safe_math::*;

#[account]
#[derive(InitSpace, Default)]
pub struct InvestTracker {
    pub asset_mint: Pubkey,
    pub strategy: Pubkey,
    pub yield_source: Pubkey, // owner of the token accounts funds are deployed to
    pub amount_invested: u64, // underlying sent to the yield source, net of frees
    pub accrued_value: u64,   // current valuation in underlying units
    pub last_update_slot: u64,
    pub last_update_ts: i64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl InvestTracker {
    pub fn init(
        &mut self,
        asset_mint: Pubkey,
        strategy: Pubkey,
        yield_source: Pubkey,
        bump: u8,
    ) -> Result<()> {
        if self.is_initialized {
            return err!(ErrorCodes::AlreadyExists);
        }

        self.asset_mint = asset_mint;
        self.strategy = strategy;
        self.yield_source = yield_source;
        self.amount_invested = 0;
        self.accrued_value = 0;
        self.last_update_slot = 0;
        self.last_update_ts = 0;
        self.is_initialized = true;
        self.bump = bump;

        Ok(())
    }

    fn touch(&mut self, slot: u64, timestamp: i64) {
        self.last_update_slot = slot;
        self.last_update_ts = timestamp;
    }

    pub fn record_deploy(&mut self, amount: u64, slot: u64, timestamp: i64) -> Result<()> {
        self.amount_invested = self.amount_invested.safe_add(amount)?;
        self.accrued_value = self.accrued_value.safe_add(amount)?;
        self.touch(slot, timestamp);
        Ok(())
    }

    /// Removes `amount` of value. Principal is reduced last, so realised yield leaves first.
    pub fn record_free(&mut self, amount: u64, slot: u64, timestamp: i64) -> Result<()> {
        if amount > self.accrued_value {
            msg!("free {} exceeds accrued value {}", amount, self.accrued_value);
            return err!(ErrorCodes::InsufficientFunds);
        }

        self.accrued_value = self.accrued_value.safe_sub(amount)?;
        self.amount_invested = self.amount_invested.min(self.accrued_value);
        self.touch(slot, timestamp);

        Ok(())
    }

    pub fn update_accrued_value(&mut self, accrued_value: u64, slot: u64, timestamp: i64) {
        self.accrued_value = accrued_value;
        self.touch(slot, timestamp);
    }
}
