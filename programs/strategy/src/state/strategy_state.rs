use anchor_lang::prelude::*;

use crate::constants::MAX_TRACKERS;
use crate::errors::ErrorCodes;

use library::math::safe_math::*;

#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub enum StrategyType {
    /// Holds the allocation idle in its own token account
    #[default]
    Simple,
    /// Deploys the allocation into external yield sources tracked by `InvestTracker`s
    Tracked,
}

pub struct StrategyParams {
    pub vault: Pubkey,
    pub index: u8,
    pub strategy_type: StrategyType,
    pub underlying_mint: Pubkey,
    pub underlying_token_account: Pubkey,
    pub manager: Pubkey,
}

/// Gain or loss recognised by one `report`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportDelta {
    pub gain: u64,
    pub loss: u64,
}

#[account]
#[derive(InitSpace, Default)]
pub struct Strategy {
    pub vault: Pubkey,
    pub index: u8,
    pub strategy_type: StrategyType,
    pub underlying_mint: Pubkey,
    pub underlying_token_account: Pubkey,
    pub manager: Pubkey, // keeper allowed to report and move funds between trackers

    pub total_assets: u64, // value recorded at the last report, adjusted by vault flows since
    pub total_idle: u64,   // underlying held in `underlying_token_account`

    // Cumulative since creation. The vault consumes the difference against its own watermark.
    pub total_gain: u64,
    pub total_loss: u64,

    pub report_id: u64,
    pub last_report_ts: i64,

    #[max_len(MAX_TRACKERS)]
    pub trackers: Vec<Pubkey>, // asset mints with an InvestTracker, in creation order

    pub is_initialized: bool,
    pub bump: u8,
}

impl Strategy {
    pub fn init(&mut self, params: StrategyParams, bump: u8) -> Result<()> {
        if self.is_initialized {
            return err!(ErrorCodes::AlreadyInitialized);
        }

        self.vault = params.vault;
        self.index = params.index;
        self.strategy_type = params.strategy_type;
        self.underlying_mint = params.underlying_mint;
        self.underlying_token_account = params.underlying_token_account;
        self.manager = params.manager;
        self.total_assets = 0;
        self.total_idle = 0;
        self.total_gain = 0;
        self.total_loss = 0;
        self.report_id = 0;
        self.last_report_ts = 0;
        self.trackers = Vec::new();
        self.is_initialized = true;
        self.bump = bump;

        Ok(())
    }

    pub fn is_keeper(&self, key: &Pubkey) -> bool {
        self.manager == *key
    }

    pub fn set_manager(&mut self, manager: Pubkey) -> Result<()> {
        if manager == Pubkey::default() {
            return err!(ErrorCodes::InvalidAccount);
        }
        self.manager = manager;
        Ok(())
    }

    pub fn add_tracker(&mut self, asset_mint: Pubkey) -> Result<()> {
        if self.strategy_type != StrategyType::Tracked {
            return err!(ErrorCodes::InvalidStrategyType);
        }

        if self.trackers.contains(&asset_mint) {
            return err!(ErrorCodes::AlreadyExists);
        }

        if self.trackers.len() >= MAX_TRACKERS {
            return err!(ErrorCodes::MaxTrackersReached);
        }

        self.trackers.push(asset_mint);
        Ok(())
    }

    /// Books underlying received from the vault.
    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        self.total_idle = self.total_idle.safe_add(amount)?;
        self.total_assets = self.total_assets.safe_add(amount)?;

        Ok(())
    }

    /// Books underlying returned to the vault. Only idle funds can leave.
    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        if amount > self.total_idle || amount > self.total_assets {
            msg!(
                "withdraw {} exceeds idle {} / assets {}",
                amount,
                self.total_idle,
                self.total_assets
            );
            return err!(ErrorCodes::InsufficientFunds);
        }

        self.total_idle = self.total_idle.safe_sub(amount)?;
        self.total_assets = self.total_assets.safe_sub(amount)?;

        Ok(())
    }

    /// Moves idle underlying out to a yield source. Total value is unchanged.
    pub fn record_deploy(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        if amount > self.total_idle {
            return err!(ErrorCodes::InsufficientFunds);
        }

        self.total_idle = self.total_idle.safe_sub(amount)?;
        Ok(())
    }

    /// Books underlying returned by a yield source. `balance` is the live token account balance,
    /// which must already hold the returned funds.
    pub fn record_free(&mut self, amount: u64, balance: u64) -> Result<()> {
        if amount == 0 {
            return err!(ErrorCodes::ZeroAmount);
        }

        let total_idle = self.total_idle.safe_add(amount)?;
        if balance < total_idle {
            msg!("balance {} does not cover idle {}", balance, total_idle);
            return err!(ErrorCodes::InsufficientFunds);
        }

        self.total_idle = total_idle;
        Ok(())
    }

    /// Revalues the strategy at `idle_balance + deployed_value` and records the difference
    /// against the last recorded value.
    pub fn record_report(
        &mut self,
        idle_balance: u64,
        deployed_value: u64,
        now: i64,
    ) -> Result<ReportDelta> {
        let current_value = idle_balance.safe_add(deployed_value)?;

        let delta = if current_value >= self.total_assets {
            ReportDelta {
                gain: current_value.safe_sub(self.total_assets)?,
                loss: 0,
            }
        } else {
            ReportDelta {
                gain: 0,
                loss: self.total_assets.safe_sub(current_value)?,
            }
        };

        self.total_gain = self.total_gain.safe_add(delta.gain)?;
        self.total_loss = self.total_loss.safe_add(delta.loss)?;
        self.total_assets = current_value;
        self.total_idle = idle_balance;
        self.report_id = self.report_id.safe_add(1)?;
        self.last_report_ts = now;

        Ok(delta)
    }
}
