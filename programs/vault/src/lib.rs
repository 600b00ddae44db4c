use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod invokes;
pub mod module;
pub mod state;
pub mod utils;

use crate::module::*;
use crate::state::*;

#[cfg(feature = "staging")]
declare_id!("2rT4oEdUv9GUufw9fNHes5cjJy5XvuDLRjYz34q3jVHS");

#[cfg(not(feature = "staging"))]
declare_id!("2L9TRFbDcRPXLvMN9uWPF2XnXeGjZvhRCGuRJKrx4ZsC");

#[program]
pub mod vault {
    use super::*;

    pub fn init_vault_config(ctx: Context<InitVaultConfig>) -> Result<()> {
        admin::init_vault_config(ctx)
    }

    pub fn initialize(ctx: Context<InitVault>, params: VaultParams) -> Result<()> {
        admin::initialize(ctx, params)
    }

    pub fn set_deposit_limit(ctx: Context<UpdateVault>, deposit_limit: u64) -> Result<()> {
        admin::set_deposit_limit(ctx, deposit_limit)
    }

    pub fn set_min_user_deposit(ctx: Context<UpdateVault>, min_user_deposit: u64) -> Result<()> {
        admin::set_min_user_deposit(ctx, min_user_deposit)
    }

    pub fn set_profit_unlock_period(
        ctx: Context<UpdateVault>,
        profit_unlock_period: u64,
    ) -> Result<()> {
        admin::set_profit_unlock_period(ctx, profit_unlock_period)
    }

    pub fn set_whitelisted_only(ctx: Context<UpdateVault>, whitelisted_only: bool) -> Result<()> {
        admin::set_whitelisted_only(ctx, whitelisted_only)
    }

    pub fn set_kyc_verified_only(
        ctx: Context<UpdateVault>,
        kyc_verified_only: bool,
    ) -> Result<()> {
        admin::set_kyc_verified_only(ctx, kyc_verified_only)
    }

    pub fn whitelist(ctx: Context<Whitelist>, user: Pubkey) -> Result<()> {
        admin::whitelist(ctx, user)
    }

    pub fn remove_from_whitelist(ctx: Context<RemoveFromWhitelist>, user: Pubkey) -> Result<()> {
        admin::remove_from_whitelist(ctx, user)
    }

    pub fn shutdown_vault(ctx: Context<UpdateVault>) -> Result<()> {
        admin::shutdown_vault(ctx)
    }

    pub fn add_strategy(ctx: Context<AddStrategy>, max_debt: u64) -> Result<()> {
        admin::add_strategy(ctx, max_debt)
    }

    pub fn remove_strategy(ctx: Context<ManageStrategy>) -> Result<()> {
        admin::remove_strategy(ctx)
    }

    pub fn update_max_debt(ctx: Context<ManageStrategy>, max_debt: u64) -> Result<()> {
        admin::update_max_debt(ctx, max_debt)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        user::deposit(ctx, amount)
    }

    pub fn withdraw<'info>(
        ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
        shares: u64,
    ) -> Result<()> {
        user::withdraw(ctx, shares)
    }

    pub fn update_debt(ctx: Context<UpdateDebt>, new_debt: u64) -> Result<()> {
        manager::update_debt(ctx, new_debt)
    }

    pub fn process_report(ctx: Context<ProcessReport>) -> Result<()> {
        manager::process_report(ctx)
    }
}
