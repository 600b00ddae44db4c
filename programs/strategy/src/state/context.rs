use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use access_control::state::{Role, USER_ROLE_SEED};

use crate::errors::ErrorCodes;
use crate::state::*;

#[derive(Accounts)]
#[instruction(index: u8)]
pub struct InitStrategy<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::StrategiesManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    /// CHECK: vault the strategy is bound to, the vault program verifies the binding in add_strategy
    pub vault: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + Strategy::INIT_SPACE,
        seeds = [vault.key().as_ref(), index.to_le_bytes().as_ref()],
        bump,
    )]
    pub strategy: Box<Account<'info, Strategy>>,

    #[account(mint::token_program = token_program)]
    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = signer,
        seeds = [STRATEGY_UNDERLYING_SEED, strategy.key().as_ref()],
        bump,
        token::mint = underlying_mint,
        token::authority = strategy,
        token::token_program = token_program,
    )]
    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(asset_mint: Pubkey)]
pub struct InitInvestTracker<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::StrategiesManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut)]
    pub strategy: Box<Account<'info, Strategy>>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + InvestTracker::INIT_SPACE,
        seeds = [INVEST_TRACKER_SEED, asset_mint.as_ref(), strategy.key().as_ref()],
        bump,
    )]
    pub invest_tracker: Box<Account<'info, InvestTracker>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(asset_mint: Pubkey)]
pub struct InitTokenAccount<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::StrategiesManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    pub strategy: Box<Account<'info, Strategy>>,

    #[account(address = asset_mint @ ErrorCodes::InvalidAccount, mint::token_program = token_program)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: created by the handler, which rejects an existing account
    #[account(
        mut,
        seeds = [TOKEN_ACCOUNT_SEED, asset_mint.as_ref(), strategy.key().as_ref()],
        bump,
    )]
    pub token_account: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetManager<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::StrategiesManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut)]
    pub strategy: Box<Account<'info, Strategy>>,
}

/// Remaining accounts: one `InvestTracker` per entry of `strategy.trackers`, in the same order.
#[derive(Accounts)]
pub struct Report<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's ReportingManager record, consulted when the signer is not the keeper
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::ReportingManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut, has_one = underlying_token_account @ ErrorCodes::InvalidAccount)]
    pub strategy: Box<Account<'info, Strategy>>,

    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

#[derive(Accounts)]
#[instruction(asset_mint: Pubkey)]
pub struct DeployFunds<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, consulted when the signer is not the keeper
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::StrategiesManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(
        mut,
        has_one = underlying_mint @ ErrorCodes::InvalidAccount,
        has_one = underlying_token_account @ ErrorCodes::InvalidAccount,
    )]
    pub strategy: Box<Account<'info, Strategy>>,

    #[account(
        mut,
        seeds = [INVEST_TRACKER_SEED, asset_mint.as_ref(), strategy.key().as_ref()],
        bump = invest_tracker.bump,
    )]
    pub invest_tracker: Box<Account<'info, InvestTracker>>,

    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = underlying_mint,
        constraint = yield_source_token_account.owner == invest_tracker.yield_source @ ErrorCodes::InvalidAccount,
    )]
    pub yield_source_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
#[instruction(asset_mint: Pubkey)]
pub struct FreeFunds<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, consulted when the signer is not the keeper
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::StrategiesManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut, has_one = underlying_token_account @ ErrorCodes::InvalidAccount)]
    pub strategy: Box<Account<'info, Strategy>>,

    #[account(
        mut,
        seeds = [INVEST_TRACKER_SEED, asset_mint.as_ref(), strategy.key().as_ref()],
        bump = invest_tracker.bump,
    )]
    pub invest_tracker: Box<Account<'info, InvestTracker>>,

    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

#[derive(Accounts)]
#[instruction(asset_mint: Pubkey)]
pub struct UpdateInvestTracker<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, consulted when the signer is not the keeper
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::StrategiesManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    pub strategy: Box<Account<'info, Strategy>>,

    #[account(
        mut,
        seeds = [INVEST_TRACKER_SEED, asset_mint.as_ref(), strategy.key().as_ref()],
        bump = invest_tracker.bump,
    )]
    pub invest_tracker: Box<Account<'info, InvestTracker>>,
}

/// Vault-initiated movement of underlying. The vault PDA signs.
#[derive(Accounts)]
pub struct VaultFunds<'info> {
    pub vault: Signer<'info>,

    #[account(
        mut,
        has_one = vault @ ErrorCodes::OnlyVault,
        has_one = underlying_mint @ ErrorCodes::InvalidAccount,
        has_one = underlying_token_account @ ErrorCodes::InvalidAccount,
    )]
    pub strategy: Box<Account<'info, Strategy>>,

    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = underlying_mint,
        token::authority = vault,
        token::token_program = token_program,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}
