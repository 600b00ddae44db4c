use anchor_lang::prelude::*;

use access_control::{state::Role, utils::check_role};
use library::{structs::MintBurnParams, token::*};

use crate::events::*;
use crate::state::*;

pub fn update_debt(ctx: Context<UpdateDebt>, new_debt: u64) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::StrategiesManager,
    )?;

    let strategy = ctx.accounts.strategy.key();
    let old_debt = ctx.accounts.vault.strategy_data(&strategy)?.current_debt;
    let change = ctx.accounts.vault.plan_debt_update(&strategy, new_debt)?;

    let index_bytes = ctx.accounts.vault.index.to_le_bytes();
    let bump = [ctx.accounts.vault.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &index_bytes, &bump]];

    match change {
        DebtChange::Increase(amount) => {
            ctx.accounts
                .get_strategy_funds_accounts()
                .deposit_funds_with_signer(amount, signer_seeds)?;
            ctx.accounts.vault.record_allocation(&strategy, amount)?;
        }
        DebtChange::Decrease(amount) => {
            ctx.accounts
                .get_strategy_funds_accounts()
                .withdraw_funds_with_signer(amount, signer_seeds)?;
            ctx.accounts.vault.record_deallocation(&strategy, amount)?;
        }
        DebtChange::Unchanged => {
            msg!("debt already at {}", new_debt);
        }
    }

    emit!(LogUpdateDebt {
        vault: ctx.accounts.vault.key(),
        strategy,
        old_debt,
        new_debt,
    });

    Ok(())
}

pub fn process_report(ctx: Context<ProcessReport>) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::ReportingManager,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let strategy = ctx.accounts.strategy.key();
    let totals = StrategyTotals {
        total_gain: ctx.accounts.strategy.total_gain,
        total_loss: ctx.accounts.strategy.total_loss,
        report_id: ctx.accounts.strategy.report_id,
    };

    let vault = &ctx.accounts.vault;
    if !vault.has_pending_report(&strategy, totals.report_id)? {
        // nothing reported since the last call, fees keep accruing to the next report
        msg!("no new report for {}", strategy);
        emit!(LogProcessReport {
            vault: vault.key(),
            strategy,
            gain: 0,
            loss: 0,
            fee_assets: 0,
            fee_shares: 0,
            net_gain_or_loss: 0,
            total_assets: vault.total_assets,
            total_shares: vault.total_shares,
            locked_profit: vault.locked_profit_at(now)?,
        });
        return Ok(());
    }

    let (gain, loss) = vault.pending_report(&strategy, totals)?;
    let managed_assets = vault.strategy_data(&strategy)?.current_debt;
    let elapsed = vault.elapsed_since_report(&strategy, now)?;

    let report = ctx.accounts.accountant.report(
        gain,
        loss,
        managed_assets,
        elapsed,
        vault.total_shares,
        vault.total_assets,
    )?;

    let index_bytes = vault.index.to_le_bytes();
    let bump = [vault.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &index_bytes, &bump]];

    mint_tokens(MintBurnParams {
        mint: ctx.accounts.shares_mint.to_account_info(),
        token_account: ctx.accounts.fee_recipient_shares_account.to_account_info(),
        authority: vault.to_account_info(),
        amount: report.fee_shares,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: Some(signer_seeds),
    })?;

    let vault = &mut ctx.accounts.vault;
    vault.apply_report(&strategy, gain, loss, &report, totals, now)?;

    emit!(LogProcessReport {
        vault: vault.key(),
        strategy,
        gain,
        loss,
        fee_assets: report.fee_assets,
        fee_shares: report.fee_shares,
        net_gain_or_loss: report.net_gain_or_loss,
        total_assets: vault.total_assets,
        total_shares: vault.total_shares,
        locked_profit: vault.locked_profit_at(now)?,
    });

    Ok(())
}
