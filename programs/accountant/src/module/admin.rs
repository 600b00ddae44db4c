use anchor_lang::prelude::*;

use access_control::{state::Role, utils::check_role};

use crate::events::*;
use crate::state::*;

pub fn init_accountants_config(ctx: Context<InitAccountantsConfig>) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::AccountantAdmin,
    )?;

    ctx.accounts.config.init(ctx.bumps.config)
}

pub fn init_accountant(ctx: Context<InitAccountant>, params: AccountantParams) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::AccountantAdmin,
    )?;

    let index = ctx.accounts.config.take_next_index()?;

    let accountant = &mut ctx.accounts.accountant;
    accountant.init(index, params, ctx.bumps.accountant)?;

    emit!(LogInitAccountant {
        accountant: accountant.key(),
        index,
        performance_fee: params.performance_fee,
        management_fee: params.management_fee,
        fee_recipient: params.fee_recipient,
    });

    Ok(())
}

pub fn set_performance_fee(ctx: Context<UpdateAccountant>, fee: u64) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::AccountantAdmin,
    )?;

    ctx.accounts.accountant.set_performance_fee(fee)?;

    emit!(LogUpdatePerformanceFee {
        accountant: ctx.accounts.accountant.key(),
        performance_fee: fee,
    });

    Ok(())
}

pub fn set_management_fee(ctx: Context<UpdateAccountant>, fee: u64) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::AccountantAdmin,
    )?;

    ctx.accounts.accountant.set_management_fee(fee)?;

    emit!(LogUpdateManagementFee {
        accountant: ctx.accounts.accountant.key(),
        management_fee: fee,
    });

    Ok(())
}

pub fn set_fee_recipient(ctx: Context<UpdateAccountant>, recipient: Pubkey) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::AccountantAdmin,
    )?;

    ctx.accounts.accountant.set_fee_recipient(recipient)?;

    emit!(LogUpdateFeeRecipient {
        accountant: ctx.accounts.accountant.key(),
        fee_recipient: recipient,
    });

    Ok(())
}
