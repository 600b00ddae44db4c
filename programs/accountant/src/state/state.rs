use anchor_lang::prelude::*;

use crate::constants::{MAX_BPS, SECONDS_PER_YEAR};
use crate::errors::ErrorCodes;

use library::math::{casting::*, mul_div::mul_div, safe_math::*, shares::convert_to_shares};

#[account]
#[derive(InitSpace, Default)]
pub struct AccountantsConfig {
    pub next_accountant_index: u64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl AccountantsConfig {
    pub fn init(&mut self, bump: u8) -> Result<()> {
        if self.is_initialized {
            return err!(ErrorCodes::AlreadyInitialized);
        }

        self.next_accountant_index = 0;
        self.is_initialized = true;
        self.bump = bump;

        Ok(())
    }

    pub fn take_next_index(&mut self) -> Result<u64> {
        let index = self.next_accountant_index;
        self.next_accountant_index = index.safe_add(1)?;
        Ok(index)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountantParams {
    pub performance_fee: u64, // bps
    pub management_fee: u64,  // bps per year
    pub fee_recipient: Pubkey,
}

#[account]
#[derive(InitSpace, Default)]
pub struct Accountant {
    pub index: u64,
    pub performance_fee: u64, // share of gross gain, in bps
    pub management_fee: u64,  // yearly rate on managed assets, in bps
    pub fee_recipient: Pubkey, // owner of the shares token account receiving fee shares
    pub bump: u8,
}

/// Outcome of pricing a strategy report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeReport {
    /// Total fee expressed in underlying units
    pub fee_assets: u64,
    /// Shares to mint to the fee recipient for `fee_assets`
    pub fee_shares: u64,
    /// Signed change in the value held by existing shareholders, fees deducted
    pub net_gain_or_loss: i128,
}

pub fn validate_fee(fee: u64) -> Result<()> {
    if fee > MAX_BPS {
        return err!(ErrorCodes::InvalidConfiguration);
    }
    Ok(())
}

impl Accountant {
    pub fn init(&mut self, index: u64, params: AccountantParams, bump: u8) -> Result<()> {
        validate_fee(params.performance_fee)?;
        validate_fee(params.management_fee)?;

        if params.fee_recipient == Pubkey::default() {
            return err!(ErrorCodes::InvalidFeeRecipient);
        }

        self.index = index;
        self.performance_fee = params.performance_fee;
        self.management_fee = params.management_fee;
        self.fee_recipient = params.fee_recipient;
        self.bump = bump;

        Ok(())
    }

    pub fn set_performance_fee(&mut self, fee: u64) -> Result<()> {
        validate_fee(fee)?;
        self.performance_fee = fee;
        Ok(())
    }

    pub fn set_management_fee(&mut self, fee: u64) -> Result<()> {
        validate_fee(fee)?;
        self.management_fee = fee;
        Ok(())
    }

    pub fn set_fee_recipient(&mut self, recipient: Pubkey) -> Result<()> {
        if recipient == Pubkey::default() {
            return err!(ErrorCodes::InvalidFeeRecipient);
        }
        self.fee_recipient = recipient;
        Ok(())
    }

    /// Pro-rata yearly fee on `managed_assets` for `elapsed` seconds.
    pub fn management_fee_for(&self, managed_assets: u64, elapsed: u64) -> Result<u64> {
        if self.management_fee == 0 || elapsed == 0 {
            return Ok(0);
        }

        let fee = managed_assets
            .cast::<u128>()?
            .safe_mul(self.management_fee.cast()?)?
            .safe_mul(elapsed.cast()?)?
            .safe_div(MAX_BPS.cast::<u128>()?.safe_mul(SECONDS_PER_YEAR.cast()?)?)?;

        Ok(fee.cast()?)
    }

    pub fn performance_fee_for(&self, gain: u64) -> Result<u64> {
        Ok(mul_div(gain, self.performance_fee, MAX_BPS)?)
    }

    /// Prices a strategy report for the vault.
    ///
    /// On a gain the performance fee plus accrued management fee is taken out of the gain
    /// (never more than the gain itself). On a loss only the management fee is charged.
    ///
    /// The vault books the gross gain or loss; fees are paid purely by minting shares.
    /// `fee_shares` is sized so that, once the report is applied, the recipient's shares are
    /// worth `fee_assets`: `fee * shares / (total_assets + gain - loss - fee)`. A fee that the
    /// remaining assets cannot cover is waived.
    pub fn report(
        &self,
        gain: u64,
        loss: u64,
        managed_assets: u64,
        elapsed: u64,
        total_shares: u64,
        total_assets: u64,
    ) -> Result<FeeReport> {
        let management_fee = self.management_fee_for(managed_assets, elapsed)?;

        let fee_assets = if gain > 0 {
            self.performance_fee_for(gain)?
                .safe_add(management_fee)?
                .min(gain)
        } else {
            management_fee
        };

        // value left to the existing holders once the report is booked
        let holders_assets = total_assets
            .safe_add(gain)?
            .saturating_sub(loss)
            .saturating_sub(fee_assets);

        let (fee_assets, fee_shares) = if fee_assets == 0 || holders_assets == 0 {
            (0, 0)
        } else {
            (
                fee_assets,
                convert_to_shares(fee_assets, total_shares, holders_assets)?,
            )
        };

        let net_gain_or_loss = gain
            .cast::<i128>()?
            .safe_sub(loss.cast()?)?
            .safe_sub(fee_assets.cast()?)?;

        Ok(FeeReport {
            fee_assets,
            fee_shares,
            net_gain_or_loss,
        })
    }
}
