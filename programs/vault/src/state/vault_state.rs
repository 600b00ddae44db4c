use anchor_lang::prelude::*;

use accountant::state::FeeReport;
use library::math::{
    casting::*,
    mul_div::mul_div_ceil,
    safe_math::*,
    shares::{convert_to_assets, convert_to_shares},
};

use crate::constants::MAX_STRATEGIES;
use crate::errors::ErrorCodes;
use crate::state::StrategyData;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultParams {
    pub deposit_limit: u64,
    pub min_user_deposit: u64,
    pub profit_unlock_period: u64, // seconds, 0 recognises profit immediately
    pub whitelisted_only: bool,
    pub kyc_verified_only: bool,
}

/// Accounts created alongside the vault.
pub struct VaultKeys {
    pub underlying_mint: Pubkey,
    pub underlying_token_account: Pubkey,
    pub shares_mint: Pubkey,
    pub accountant: Pubkey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebtChange {
    Unchanged,
    Increase(u64),
    Decrease(u64),
}

/// Strategy counters observed when processing a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrategyTotals {
    pub total_gain: u64,
    pub total_loss: u64,
    pub report_id: u64,
}

#[account]
#[derive(InitSpace, Default)]
pub struct Vault {
    pub index: u64,
    pub underlying_mint: Pubkey,
    pub underlying_token_account: Pubkey,
    pub shares_mint: Pubkey,
    pub accountant: Pubkey,

    pub total_assets: u64, // idle + total_debt
    pub total_shares: u64, // mirrors the shares mint supply
    pub total_debt: u64,   // sum of strategies' current_debt

    pub deposit_limit: u64,
    pub min_user_deposit: u64,

    pub profit_unlock_period: u64,
    pub locked_profit: u64, // locked amount at profit_unlock_start
    pub profit_unlock_start: i64,
    pub profit_unlock_end: i64,

    pub whitelisted_only: bool,
    pub kyc_verified_only: bool,
    pub is_shutdown: bool,

    #[max_len(MAX_STRATEGIES)]
    pub strategies: Vec<StrategyData>,

    pub bump: u8,
}

impl Vault {
    pub fn init(&mut self, index: u64, keys: VaultKeys, params: VaultParams, bump: u8) {
        self.index = index;
        self.underlying_mint = keys.underlying_mint;
        self.underlying_token_account = keys.underlying_token_account;
        self.shares_mint = keys.shares_mint;
        self.accountant = keys.accountant;

        self.total_assets = 0;
        self.total_shares = 0;
        self.total_debt = 0;

        self.deposit_limit = params.deposit_limit;
        self.min_user_deposit = params.min_user_deposit;
        self.profit_unlock_period = params.profit_unlock_period;
        self.locked_profit = 0;
        self.profit_unlock_start = 0;
        self.profit_unlock_end = 0;

        self.whitelisted_only = params.whitelisted_only;
        self.kyc_verified_only = params.kyc_verified_only;
        self.is_shutdown = false;
        self.strategies = Vec::new();
        self.bump = bump;
    }

    pub fn total_idle(&self) -> Result<u64> {
        Ok(self.total_assets.safe_sub(self.total_debt)?)
    }

    /// Profit still vesting at `now`. Releases linearly between unlock start and end, rounded up.
    pub fn locked_profit_at(&self, now: i64) -> Result<u64> {
        if self.locked_profit == 0 || now >= self.profit_unlock_end {
            return Ok(0);
        }

        let duration = self
            .profit_unlock_end
            .safe_sub(self.profit_unlock_start)?
            .cast::<u64>()?;
        if duration == 0 {
            return Ok(0);
        }

        let remaining = self
            .profit_unlock_end
            .safe_sub(now.max(self.profit_unlock_start))?
            .cast::<u64>()?;

        Ok(mul_div_ceil(self.locked_profit, remaining, duration)?)
    }

    /// Assets backing shares at `now`, excluding vesting profit.
    pub fn free_assets(&self, now: i64) -> Result<u64> {
        Ok(self.total_assets.safe_sub(self.locked_profit_at(now)?)?)
    }

    /// Validates a deposit and returns the shares it mints.
    pub fn preview_deposit(&self, amount: u64, now: i64) -> Result<u64> {
        if amount == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        if self.is_shutdown {
            return err!(ErrorCodes::VaultShutdown);
        }

        if amount < self.min_user_deposit {
            return err!(ErrorCodes::BelowMinimumDeposit);
        }

        if self.total_assets.safe_add(amount)? > self.deposit_limit {
            msg!(
                "deposit {} over limit {} with {} assets",
                amount,
                self.deposit_limit,
                self.total_assets
            );
            return err!(ErrorCodes::DepositLimitExceeded);
        }

        let free_assets = self.free_assets(now)?;
        if self.total_shares > 0 && free_assets == 0 {
            return err!(ErrorCodes::InvalidSharePrice);
        }

        let shares = convert_to_shares(amount, self.total_shares, free_assets)?;
        if shares == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        Ok(shares)
    }

    pub fn apply_deposit(&mut self, amount: u64, shares: u64) -> Result<()> {
        self.total_assets = self.total_assets.safe_add(amount)?;
        self.total_shares = self.total_shares.safe_add(shares)?;
        Ok(())
    }

    /// Assets redeemed by burning `shares`. Allowed in any state.
    pub fn preview_withdraw(&self, shares: u64, now: i64) -> Result<u64> {
        if shares == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        if shares > self.total_shares {
            return err!(ErrorCodes::InsufficientShares);
        }

        let assets = convert_to_assets(shares, self.total_shares, self.free_assets(now)?)?;
        if assets == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        Ok(assets)
    }

    pub fn apply_withdraw(&mut self, shares: u64, assets: u64) -> Result<()> {
        if assets > self.total_idle()? {
            return err!(ErrorCodes::InsufficientLiquidity);
        }

        self.total_shares = self.total_shares.safe_sub(shares)?;
        self.total_assets = self.total_assets.safe_sub(assets)?;
        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<()> {
        if self.is_shutdown {
            return err!(ErrorCodes::VaultShutdown);
        }
        self.is_shutdown = true;
        Ok(())
    }

    fn position_of(&self, strategy: &Pubkey) -> Result<usize> {
        self.strategies
            .iter()
            .position(|data| data.key == *strategy)
            .ok_or_else(|| error!(ErrorCodes::StrategyNotLinked))
    }

    pub fn strategy_data(&self, strategy: &Pubkey) -> Result<&StrategyData> {
        let position = self.position_of(strategy)?;
        Ok(&self.strategies[position])
    }

    pub fn add_strategy(
        &mut self,
        strategy: Pubkey,
        index: u8,
        max_debt: u64,
        now: i64,
    ) -> Result<()> {
        if self.is_shutdown {
            return err!(ErrorCodes::VaultShutdown);
        }

        if self.strategies.iter().any(|data| data.key == strategy) {
            return err!(ErrorCodes::StrategyAlreadyAdded);
        }

        if self.strategies.len() >= MAX_STRATEGIES {
            return err!(ErrorCodes::MaxStrategiesReached);
        }

        self.strategies.push(StrategyData {
            key: strategy,
            index,
            max_debt,
            last_update: now,
            ..Default::default()
        });

        Ok(())
    }

    pub fn remove_strategy(&mut self, strategy: &Pubkey) -> Result<()> {
        let position = self.position_of(strategy)?;

        if self.strategies[position].current_debt > 0 {
            return err!(ErrorCodes::StrategyHasDebt);
        }

        self.strategies.remove(position);
        Ok(())
    }

    pub fn update_max_debt(&mut self, strategy: &Pubkey, max_debt: u64) -> Result<()> {
        let position = self.position_of(strategy)?;
        self.strategies[position].max_debt = max_debt;
        Ok(())
    }

    /// Direction and size of moving a strategy's allocation to `new_debt`.
    pub fn plan_debt_update(&self, strategy: &Pubkey, new_debt: u64) -> Result<DebtChange> {
        let data = self.strategy_data(strategy)?;

        if new_debt > data.current_debt {
            if self.is_shutdown {
                return err!(ErrorCodes::VaultShutdown);
            }

            if new_debt > data.max_debt {
                msg!("debt {} over max debt {}", new_debt, data.max_debt);
                return err!(ErrorCodes::MaxDebtExceeded);
            }

            let amount = new_debt.safe_sub(data.current_debt)?;
            if amount > self.total_idle()? {
                return err!(ErrorCodes::InsufficientLiquidity);
            }

            return Ok(DebtChange::Increase(amount));
        }

        if new_debt < data.current_debt {
            return Ok(DebtChange::Decrease(data.current_debt.safe_sub(new_debt)?));
        }

        Ok(DebtChange::Unchanged)
    }

    pub fn record_allocation(&mut self, strategy: &Pubkey, amount: u64) -> Result<()> {
        let position = self.position_of(strategy)?;

        self.strategies[position].current_debt =
            self.strategies[position].current_debt.safe_add(amount)?;
        self.total_debt = self.total_debt.safe_add(amount)?;

        Ok(())
    }

    pub fn record_deallocation(&mut self, strategy: &Pubkey, amount: u64) -> Result<()> {
        let position = self.position_of(strategy)?;

        self.strategies[position].current_debt =
            self.strategies[position].current_debt.safe_sub(amount)?;
        self.total_debt = self.total_debt.safe_sub(amount)?;

        Ok(())
    }

    pub fn has_pending_report(&self, strategy: &Pubkey, report_id: u64) -> Result<bool> {
        Ok(report_id > self.strategy_data(strategy)?.last_report_id)
    }

    /// Gain or loss the strategy reported since the last processed report, netted to one side.
    pub fn pending_report(&self, strategy: &Pubkey, totals: StrategyTotals) -> Result<(u64, u64)> {
        let data = self.strategy_data(strategy)?;

        if totals.report_id <= data.last_report_id {
            return Ok((0, 0));
        }

        let gain = totals.total_gain.safe_sub(data.reported_gain)?;
        let loss = totals.total_loss.safe_sub(data.reported_loss)?;

        if gain >= loss {
            Ok((gain.safe_sub(loss)?, 0))
        } else {
            Ok((0, loss.safe_sub(gain)?))
        }
    }

    pub fn elapsed_since_report(&self, strategy: &Pubkey, now: i64) -> Result<u64> {
        let data = self.strategy_data(strategy)?;
        Ok(now.safe_sub(data.last_update)?.max(0).cast()?)
    }

    /// Books a priced report: the gross gain or loss moves the strategy's debt and total assets,
    /// fees only dilute through `report.fee_shares`. The holders' share of a gain vests over
    /// the unlock period, the fee part is free immediately.
    pub fn apply_report(
        &mut self,
        strategy: &Pubkey,
        gain: u64,
        loss: u64,
        report: &FeeReport,
        totals: StrategyTotals,
        now: i64,
    ) -> Result<()> {
        let position = self.position_of(strategy)?;
        let locked_now = self.locked_profit_at(now)?;

        if gain > 0 {
            self.strategies[position].current_debt =
                self.strategies[position].current_debt.safe_add(gain)?;
            self.total_debt = self.total_debt.safe_add(gain)?;
            self.total_assets = self.total_assets.safe_add(gain)?;

            let vested_gain = gain.saturating_sub(report.fee_assets);
            self.lock_profit(locked_now.safe_add(vested_gain)?, now)?;
        } else if loss > 0 {
            let realized = loss.min(self.strategies[position].current_debt);

            self.strategies[position].current_debt =
                self.strategies[position].current_debt.safe_sub(realized)?;
            self.total_debt = self.total_debt.safe_sub(realized)?;
            self.total_assets = self.total_assets.safe_sub(realized)?;

            // vesting profit absorbs the loss first, the rest keeps its schedule
            self.locked_profit = locked_now.saturating_sub(realized);
            self.profit_unlock_start = now;
        }

        self.total_shares = self.total_shares.safe_add(report.fee_shares)?;

        let data = &mut self.strategies[position];
        if totals.report_id > data.last_report_id {
            data.reported_gain = totals.total_gain;
            data.reported_loss = totals.total_loss;
            data.last_report_id = totals.report_id;
        }
        data.last_update = now;

        Ok(())
    }

    fn lock_profit(&mut self, amount: u64, now: i64) -> Result<()> {
        self.profit_unlock_start = now;

        if amount == 0 || self.profit_unlock_period == 0 {
            self.locked_profit = 0;
            self.profit_unlock_end = now;
            return Ok(());
        }

        self.locked_profit = amount;
        self.profit_unlock_end = now.safe_add(self.profit_unlock_period.cast()?)?;
        Ok(())
    }
}
