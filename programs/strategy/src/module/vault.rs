use anchor_lang::prelude::*;

use library::{structs::TokenTransferParams, token::*};

use crate::events::*;
use crate::state::*;

pub fn deposit_funds(ctx: Context<VaultFunds>, amount: u64) -> Result<()> {
    ctx.accounts.strategy.record_deposit(amount)?;

    // vault signature carries through to the token program
    transfer_spl_tokens(TokenTransferParams {
        source: ctx.accounts.vault_token_account.to_account_info(),
        destination: ctx.accounts.underlying_token_account.to_account_info(),
        authority: ctx.accounts.vault.to_account_info(),
        amount,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: None,
        mint: *ctx.accounts.underlying_mint.clone(),
    })?;

    emit!(LogDepositFunds {
        strategy: ctx.accounts.strategy.key(),
        amount,
        total_assets: ctx.accounts.strategy.total_assets,
    });

    Ok(())
}

pub fn withdraw_funds(ctx: Context<VaultFunds>, amount: u64) -> Result<()> {
    ctx.accounts.strategy.record_withdraw(amount)?;

    let strategy = &ctx.accounts.strategy;
    let index = [strategy.index];
    let bump = [strategy.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[strategy.vault.as_ref(), &index, &bump]];

    transfer_spl_tokens(TokenTransferParams {
        source: ctx.accounts.underlying_token_account.to_account_info(),
        destination: ctx.accounts.vault_token_account.to_account_info(),
        authority: strategy.to_account_info(),
        amount,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: Some(signer_seeds),
        mint: *ctx.accounts.underlying_mint.clone(),
    })?;

    emit!(LogWithdrawFunds {
        strategy: strategy.key(),
        amount,
        total_assets: strategy.total_assets,
    });

    Ok(())
}
