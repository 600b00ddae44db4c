use anchor_lang::prelude::*;

use access_control::state::Role;
use library::{structs::TokenTransferParams, token::*};

use crate::events::*;
use crate::state::*;
use crate::utils::{check_keeper_or_role, deployed_value};

pub fn report(ctx: Context<Report>) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    check_keeper_or_role(
        &ctx.accounts.strategy,
        &signer,
        &ctx.accounts.roles,
        Role::ReportingManager,
    )?;

    let strategy_key = ctx.accounts.strategy.key();
    let deployed = deployed_value(
        &strategy_key,
        &ctx.accounts.strategy,
        ctx.remaining_accounts,
    )?;
    let idle = ctx.accounts.underlying_token_account.amount;
    let now = Clock::get()?.unix_timestamp;

    let strategy = &mut ctx.accounts.strategy;
    let delta = strategy.record_report(idle, deployed, now)?;

    emit!(LogStrategyReport {
        strategy: strategy_key,
        report_id: strategy.report_id,
        total_assets: strategy.total_assets,
        total_idle: strategy.total_idle,
        gain: delta.gain,
        loss: delta.loss,
        timestamp: now,
    });

    Ok(())
}

pub fn deploy_funds(ctx: Context<DeployFunds>, asset_mint: Pubkey, amount: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    check_keeper_or_role(
        &ctx.accounts.strategy,
        &signer,
        &ctx.accounts.roles,
        Role::StrategiesManager,
    )?;

    let clock = Clock::get()?;

    ctx.accounts.strategy.record_deploy(amount)?;
    ctx.accounts
        .invest_tracker
        .record_deploy(amount, clock.slot, clock.unix_timestamp)?;

    let strategy = &ctx.accounts.strategy;
    let index = [strategy.index];
    let bump = [strategy.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[strategy.vault.as_ref(), &index, &bump]];

    transfer_spl_tokens(TokenTransferParams {
        source: ctx.accounts.underlying_token_account.to_account_info(),
        destination: ctx.accounts.yield_source_token_account.to_account_info(),
        authority: strategy.to_account_info(),
        amount,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: Some(signer_seeds),
        mint: *ctx.accounts.underlying_mint.clone(),
    })?;

    emit!(LogDeployFunds {
        strategy: strategy.key(),
        asset_mint,
        amount,
        amount_invested: ctx.accounts.invest_tracker.amount_invested,
    });

    Ok(())
}

pub fn free_funds(ctx: Context<FreeFunds>, asset_mint: Pubkey, amount: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    check_keeper_or_role(
        &ctx.accounts.strategy,
        &signer,
        &ctx.accounts.roles,
        Role::StrategiesManager,
    )?;

    let clock = Clock::get()?;
    let balance = ctx.accounts.underlying_token_account.amount;

    ctx.accounts.strategy.record_free(amount, balance)?;
    ctx.accounts
        .invest_tracker
        .record_free(amount, clock.slot, clock.unix_timestamp)?;

    emit!(LogFreeFunds {
        strategy: ctx.accounts.strategy.key(),
        asset_mint,
        amount,
        amount_invested: ctx.accounts.invest_tracker.amount_invested,
    });

    Ok(())
}

pub fn update_invest_tracker(
    ctx: Context<UpdateInvestTracker>,
    asset_mint: Pubkey,
    accrued_value: u64,
) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    check_keeper_or_role(
        &ctx.accounts.strategy,
        &signer,
        &ctx.accounts.roles,
        Role::StrategiesManager,
    )?;

    let clock = Clock::get()?;
    ctx.accounts
        .invest_tracker
        .update_accrued_value(accrued_value, clock.slot, clock.unix_timestamp);

    emit!(LogUpdateInvestTracker {
        strategy: ctx.accounts.strategy.key(),
        asset_mint,
        accrued_value,
        slot: clock.slot,
    });

    Ok(())
}
