use anchor_lang::prelude::*;

use access_control::{state::Role, utils::check_role};
use library::token::check_underlying_mint;

use crate::events::*;
use crate::state::*;

pub fn init_vault_config(ctx: Context<InitVaultConfig>) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )?;

    ctx.accounts.config.init(ctx.bumps.config)
}

pub fn initialize(ctx: Context<InitVault>, params: VaultParams) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )?;

    check_underlying_mint(&ctx.accounts.underlying_mint)?;

    let index = ctx.accounts.config.take_next_index()?;
    let keys = VaultKeys {
        underlying_mint: ctx.accounts.underlying_mint.key(),
        underlying_token_account: ctx.accounts.underlying_token_account.key(),
        shares_mint: ctx.accounts.shares_mint.key(),
        accountant: ctx.accounts.accountant.key(),
    };

    let vault = &mut ctx.accounts.vault;
    vault.init(index, keys, params, ctx.bumps.vault);

    emit!(LogInitVault {
        vault: vault.key(),
        index,
        underlying_mint: vault.underlying_mint,
        shares_mint: vault.shares_mint,
        accountant: vault.accountant,
        deposit_limit: vault.deposit_limit,
    });

    Ok(())
}

fn check_vaults_admin(ctx: &Context<UpdateVault>) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )
}

pub fn set_deposit_limit(ctx: Context<UpdateVault>, deposit_limit: u64) -> Result<()> {
    check_vaults_admin(&ctx)?;

    ctx.accounts.vault.deposit_limit = deposit_limit;

    emit!(LogUpdateDepositLimit {
        vault: ctx.accounts.vault.key(),
        deposit_limit,
    });

    Ok(())
}

pub fn set_min_user_deposit(ctx: Context<UpdateVault>, min_user_deposit: u64) -> Result<()> {
    check_vaults_admin(&ctx)?;

    ctx.accounts.vault.min_user_deposit = min_user_deposit;

    emit!(LogUpdateMinUserDeposit {
        vault: ctx.accounts.vault.key(),
        min_user_deposit,
    });

    Ok(())
}

pub fn set_profit_unlock_period(
    ctx: Context<UpdateVault>,
    profit_unlock_period: u64,
) -> Result<()> {
    check_vaults_admin(&ctx)?;

    // applies from the next report, the running window keeps its end
    ctx.accounts.vault.profit_unlock_period = profit_unlock_period;

    emit!(LogUpdateProfitUnlockPeriod {
        vault: ctx.accounts.vault.key(),
        profit_unlock_period,
    });

    Ok(())
}

pub fn set_whitelisted_only(ctx: Context<UpdateVault>, whitelisted_only: bool) -> Result<()> {
    check_vaults_admin(&ctx)?;

    ctx.accounts.vault.whitelisted_only = whitelisted_only;

    emit!(LogUpdateWhitelistedOnly {
        vault: ctx.accounts.vault.key(),
        whitelisted_only,
    });

    Ok(())
}

pub fn set_kyc_verified_only(ctx: Context<UpdateVault>, kyc_verified_only: bool) -> Result<()> {
    check_vaults_admin(&ctx)?;

    ctx.accounts.vault.kyc_verified_only = kyc_verified_only;

    emit!(LogUpdateKycVerifiedOnly {
        vault: ctx.accounts.vault.key(),
        kyc_verified_only,
    });

    Ok(())
}

pub fn shutdown_vault(ctx: Context<UpdateVault>) -> Result<()> {
    check_vaults_admin(&ctx)?;

    ctx.accounts.vault.shutdown()?;

    emit!(LogShutdown {
        vault: ctx.accounts.vault.key(),
    });

    Ok(())
}

pub fn whitelist(ctx: Context<Whitelist>, user: Pubkey) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )?;

    let vault = ctx.accounts.vault.key();
    ctx.accounts
        .user_data
        .set_whitelisted(vault, user, true, ctx.bumps.user_data);

    emit!(LogUpdateWhitelist {
        vault,
        user,
        whitelisted: true,
    });

    Ok(())
}

pub fn remove_from_whitelist(ctx: Context<RemoveFromWhitelist>, user: Pubkey) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )?;

    let vault = ctx.accounts.vault.key();
    let bump = ctx.accounts.user_data.bump;
    ctx.accounts
        .user_data
        .set_whitelisted(vault, user, false, bump);

    emit!(LogUpdateWhitelist {
        vault,
        user,
        whitelisted: false,
    });

    Ok(())
}

pub fn add_strategy(ctx: Context<AddStrategy>, max_debt: u64) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let strategy = ctx.accounts.strategy.key();
    let index = ctx.accounts.strategy.index;

    ctx.accounts
        .vault
        .add_strategy(strategy, index, max_debt, now)?;

    emit!(LogAddStrategy {
        vault: ctx.accounts.vault.key(),
        strategy,
        max_debt,
    });

    Ok(())
}

pub fn remove_strategy(ctx: Context<ManageStrategy>) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )?;

    let strategy = ctx.accounts.strategy.key();
    ctx.accounts.vault.remove_strategy(&strategy)?;

    emit!(LogRemoveStrategy {
        vault: ctx.accounts.vault.key(),
        strategy,
    });

    Ok(())
}

pub fn update_max_debt(ctx: Context<ManageStrategy>, max_debt: u64) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::VaultsAdmin,
    )?;

    let strategy = ctx.accounts.strategy.key();
    ctx.accounts.vault.update_max_debt(&strategy, max_debt)?;

    emit!(LogUpdateMaxDebt {
        vault: ctx.accounts.vault.key(),
        strategy,
        max_debt,
    });

    Ok(())
}
