use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod module;
pub mod state;
pub mod utils;

use crate::module::*;
use crate::state::*;

#[cfg(feature = "staging")]
declare_id!("2hfV1EeCVtFdFRA15mD6JCYZSiq4417qibQmgh7mqKVC");

#[cfg(not(feature = "staging"))]
declare_id!("5bBms9kKCa7bLGqsVNDAr8XyRvoV7FtKdFL9oFowzduP");

#[program]
pub mod strategy {
    use super::*;

    pub fn initialize(
        ctx: Context<InitStrategy>,
        index: u8,
        strategy_type: StrategyType,
        manager: Pubkey,
    ) -> Result<()> {
        admin::initialize(ctx, index, strategy_type, manager)
    }

    pub fn init_invest_tracker(
        ctx: Context<InitInvestTracker>,
        asset_mint: Pubkey,
        yield_source: Pubkey,
    ) -> Result<()> {
        admin::init_invest_tracker(ctx, asset_mint, yield_source)
    }

    pub fn init_token_account(ctx: Context<InitTokenAccount>, asset_mint: Pubkey) -> Result<()> {
        admin::init_token_account(ctx, asset_mint)
    }

    pub fn set_manager(ctx: Context<SetManager>, new_manager: Pubkey) -> Result<()> {
        admin::set_manager(ctx, new_manager)
    }

    pub fn report(ctx: Context<Report>) -> Result<()> {
        keeper::report(ctx)
    }

    pub fn deploy_funds(
        ctx: Context<DeployFunds>,
        asset_mint: Pubkey,
        amount: u64,
    ) -> Result<()> {
        keeper::deploy_funds(ctx, asset_mint, amount)
    }

    pub fn free_funds(ctx: Context<FreeFunds>, asset_mint: Pubkey, amount: u64) -> Result<()> {
        keeper::free_funds(ctx, asset_mint, amount)
    }

    pub fn update_invest_tracker(
        ctx: Context<UpdateInvestTracker>,
        asset_mint: Pubkey,
        accrued_value: u64,
    ) -> Result<()> {
        keeper::update_invest_tracker(ctx, asset_mint, accrued_value)
    }

    pub fn deposit_funds(ctx: Context<VaultFunds>, amount: u64) -> Result<()> {
        vault::deposit_funds(ctx, amount)
    }

    pub fn withdraw_funds(ctx: Context<VaultFunds>, amount: u64) -> Result<()> {
        vault::withdraw_funds(ctx, amount)
    }
}
