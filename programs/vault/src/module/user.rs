use anchor_lang::prelude::*;

use library::{
    math::safe_math::*,
    structs::{MintBurnParams, TokenTransferParams},
    token::*,
};

use crate::constants::WITHDRAW_ACCOUNTS_PER_STRATEGY;
use crate::errors::ErrorCodes;
use crate::events::*;
use crate::state::*;
use crate::utils::*;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_key = ctx.accounts.vault.key();
    let user = ctx.accounts.user.key();

    let shares = ctx.accounts.vault.preview_deposit(amount, now)?;

    verify_deposit_gates(
        &ctx.accounts.vault,
        &vault_key,
        &user,
        &ctx.accounts.user_data,
        &ctx.accounts.kyc_role,
    )?;

    transfer_spl_tokens(TokenTransferParams {
        source: ctx.accounts.user_token_account.to_account_info(),
        destination: ctx.accounts.underlying_token_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
        amount,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: None,
        mint: *ctx.accounts.underlying_mint.clone(),
    })?;

    let index_bytes = ctx.accounts.vault.index.to_le_bytes();
    let bump = [ctx.accounts.vault.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &index_bytes, &bump]];

    mint_tokens(MintBurnParams {
        mint: ctx.accounts.shares_mint.to_account_info(),
        token_account: ctx.accounts.user_shares_account.to_account_info(),
        authority: ctx.accounts.vault.to_account_info(),
        amount: shares,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: Some(signer_seeds),
    })?;

    let vault = &mut ctx.accounts.vault;
    vault.apply_deposit(amount, shares)?;

    emit!(LogDeposit {
        vault: vault_key,
        user,
        assets: amount,
        shares,
        total_assets: vault.total_assets,
        total_shares: vault.total_shares,
    });

    Ok(())
}

/// Pulls `shortfall` from the strategies offered in `remaining_accounts`, which must follow the
/// vault's withdraw queue from its head.
fn pull_from_strategies<'info>(
    accounts: &mut Withdraw<'info>,
    remaining_accounts: &'info [AccountInfo<'info>],
    shortfall: u64,
) -> Result<()> {
    if remaining_accounts.len() % WITHDRAW_ACCOUNTS_PER_STRATEGY != 0 {
        return err!(ErrorCodes::InvalidAccount);
    }

    let vault_key = accounts.vault.key();
    let queue = withdraw_queue(&accounts.vault.strategies);
    let offered: Vec<Pubkey> = remaining_accounts
        .chunks(WITHDRAW_ACCOUNTS_PER_STRATEGY)
        .map(|pair| pair[0].key())
        .collect();
    check_offered_strategies(&queue, &offered)?;

    let mut candidates: Vec<PullCandidate> = Vec::new();

    for pair in remaining_accounts.chunks(WITHDRAW_ACCOUNTS_PER_STRATEGY) {
        let (strategy_info, token_info) = (&pair[0], &pair[1]);

        let strategy = load_strategy(strategy_info)?;
        if strategy.vault != vault_key {
            return err!(ErrorCodes::StrategyNotLinked);
        }
        if token_info.key() != strategy.underlying_token_account {
            return err!(ErrorCodes::InvalidAccount);
        }

        let data = accounts.vault.strategy_data(strategy_info.key)?;
        candidates.push(PullCandidate {
            index: data.index,
            available: strategy.total_idle.min(data.current_debt),
        });
    }

    let pulls = plan_withdrawal(shortfall, &candidates, offered.len() == queue.len())?;

    let index_bytes = accounts.vault.index.to_le_bytes();
    let bump = [accounts.vault.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &index_bytes, &bump]];

    for pull in pulls {
        let offset = pull.slot * WITHDRAW_ACCOUNTS_PER_STRATEGY;
        let strategy_info = &remaining_accounts[offset];
        let token_info = &remaining_accounts[offset + 1];

        accounts
            .get_strategy_funds_accounts(strategy_info, token_info)
            .withdraw_funds_with_signer(pull.amount, signer_seeds)?;

        accounts
            .vault
            .record_deallocation(strategy_info.key, pull.amount)?;
    }

    Ok(())
}

pub fn withdraw<'info>(
    ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
    shares: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let assets = ctx.accounts.vault.preview_withdraw(shares, now)?;
    let idle = ctx.accounts.vault.total_idle()?;

    if assets > idle {
        pull_from_strategies(ctx.accounts, ctx.remaining_accounts, assets.safe_sub(idle)?)?;
    }

    burn_tokens(MintBurnParams {
        mint: ctx.accounts.shares_mint.to_account_info(),
        token_account: ctx.accounts.user_shares_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
        amount: shares,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: None,
    })?;

    let index_bytes = ctx.accounts.vault.index.to_le_bytes();
    let bump = [ctx.accounts.vault.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &index_bytes, &bump]];

    transfer_spl_tokens(TokenTransferParams {
        source: ctx.accounts.underlying_token_account.to_account_info(),
        destination: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.vault.to_account_info(),
        amount: assets,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: Some(signer_seeds),
        mint: *ctx.accounts.underlying_mint.clone(),
    })?;

    let vault = &mut ctx.accounts.vault;
    vault.apply_withdraw(shares, assets)?;

    emit!(LogWithdraw {
        vault: vault.key(),
        user: ctx.accounts.user.key(),
        assets,
        shares,
        total_assets: vault.total_assets,
        total_shares: vault.total_shares,
    });

    Ok(())
}
