use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use access_control::state::{Role, USER_ROLE_SEED};
use accountant::state::Accountant;
use strategy::{program::Strategy as StrategyProgram, state::Strategy};

use crate::errors::ErrorCodes;
use crate::invokes::StrategyFundsCpiAccounts;
use crate::state::*;

#[derive(Accounts)]
pub struct InitVaultConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's VaultsAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::VaultsAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + VaultsConfig::INIT_SPACE,
        seeds = [VAULTS_CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, VaultsConfig>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitVault<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's VaultsAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::VaultsAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut, seeds = [VAULTS_CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, VaultsConfig>>,

    #[account(
        init,
        payer = signer,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, config.next_vault_index.to_le_bytes().as_ref()],
        bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(mint::token_program = token_program)]
    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = signer,
        seeds = [SHARES_SEED, vault.key().as_ref()],
        bump,
        mint::decimals = underlying_mint.decimals,
        mint::authority = vault,
        mint::token_program = token_program,
    )]
    pub shares_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = signer,
        seeds = [UNDERLYING_SEED, vault.key().as_ref()],
        bump,
        token::mint = underlying_mint,
        token::authority = vault,
        token::token_program = token_program,
    )]
    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub accountant: Box<Account<'info, Accountant>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateVault<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's VaultsAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::VaultsAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut)]
    pub vault: Box<Account<'info, Vault>>,
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct Whitelist<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's VaultsAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::VaultsAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    pub vault: Box<Account<'info, Vault>>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + UserData::INIT_SPACE,
        seeds = [USER_DATA_SEED, vault.key().as_ref(), user.as_ref()],
        bump,
    )]
    pub user_data: Account<'info, UserData>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct RemoveFromWhitelist<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's VaultsAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::VaultsAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        seeds = [USER_DATA_SEED, vault.key().as_ref(), user.as_ref()],
        bump = user_data.bump,
    )]
    pub user_data: Account<'info, UserData>,
}

#[derive(Accounts)]
pub struct AddStrategy<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's VaultsAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::VaultsAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut)]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        constraint = strategy.vault == vault.key() @ ErrorCodes::StrategyNotLinked,
        constraint = strategy.underlying_mint == vault.underlying_mint @ ErrorCodes::InvalidAccount,
    )]
    pub strategy: Box<Account<'info, Strategy>>,
}

#[derive(Accounts)]
pub struct ManageStrategy<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's VaultsAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::VaultsAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut)]
    pub vault: Box<Account<'info, Vault>>,

    /// CHECK: looked up in the vault's strategy table
    pub strategy: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        has_one = underlying_mint @ ErrorCodes::InvalidAccount,
        has_one = underlying_token_account @ ErrorCodes::InvalidAccount,
        has_one = shares_mint @ ErrorCodes::InvalidAccount,
    )]
    pub vault: Box<Account<'info, Vault>>,

    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, token::mint = underlying_mint, token::authority = user)]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub shares_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = shares_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_shares_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: user's whitelist record, may not exist
    #[account(
        seeds = [USER_DATA_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_data: UncheckedAccount<'info>,

    /// CHECK: user's KycVerified record, may not exist
    #[account(
        seeds = [USER_ROLE_SEED, user.key().as_ref(), Role::KycVerified.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub kyc_role: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Remaining accounts: `[strategy, strategy_underlying_token_account]` pairs offered to cover
/// any shortfall of idle funds.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub user: Signer<'info>,

    #[account(
        mut,
        has_one = underlying_mint @ ErrorCodes::InvalidAccount,
        has_one = underlying_token_account @ ErrorCodes::InvalidAccount,
        has_one = shares_mint @ ErrorCodes::InvalidAccount,
    )]
    pub vault: Box<Account<'info, Vault>>,

    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, token::mint = underlying_mint)]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub shares_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut, token::mint = shares_mint, token::authority = user)]
    pub user_shares_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub strategy_program: Program<'info, StrategyProgram>,
}

impl<'info> Withdraw<'info> {
    pub fn get_strategy_funds_accounts(
        &self,
        strategy: &AccountInfo<'info>,
        strategy_token_account: &AccountInfo<'info>,
    ) -> StrategyFundsCpiAccounts<'info> {
        StrategyFundsCpiAccounts {
            strategy_program: self.strategy_program.to_account_info(),
            vault: self.vault.to_account_info(),
            strategy: strategy.clone(),
            underlying_mint: self.underlying_mint.to_account_info(),
            vault_token_account: self.underlying_token_account.to_account_info(),
            strategy_token_account: strategy_token_account.clone(),
            token_program: self.token_program.to_account_info(),
        }
    }
}

#[derive(Accounts)]
pub struct UpdateDebt<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's StrategiesManager record, resolved through access_control::utils::check_role
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
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        constraint = strategy.vault == vault.key() @ ErrorCodes::StrategyNotLinked,
    )]
    pub strategy: Box<Account<'info, Strategy>>,

    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub underlying_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = strategy.underlying_token_account @ ErrorCodes::InvalidAccount,
    )]
    pub strategy_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub strategy_program: Program<'info, StrategyProgram>,
}

impl<'info> UpdateDebt<'info> {
    pub fn get_strategy_funds_accounts(&self) -> StrategyFundsCpiAccounts<'info> {
        StrategyFundsCpiAccounts {
            strategy_program: self.strategy_program.to_account_info(),
            vault: self.vault.to_account_info(),
            strategy: self.strategy.to_account_info(),
            underlying_mint: self.underlying_mint.to_account_info(),
            vault_token_account: self.underlying_token_account.to_account_info(),
            strategy_token_account: self.strategy_token_account.to_account_info(),
            token_program: self.token_program.to_account_info(),
        }
    }
}

#[derive(Accounts)]
pub struct ProcessReport<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's ReportingManager record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::ReportingManager.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(
        mut,
        has_one = shares_mint @ ErrorCodes::InvalidAccount,
        has_one = accountant @ ErrorCodes::InvalidAccount,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(constraint = strategy.vault == vault.key() @ ErrorCodes::StrategyNotLinked)]
    pub strategy: Box<Account<'info, Strategy>>,

    pub accountant: Box<Account<'info, Accountant>>,

    #[account(mut)]
    pub shares_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = shares_mint,
        constraint = fee_recipient_shares_account.owner == accountant.fee_recipient @ ErrorCodes::InvalidAccount,
    )]
    pub fee_recipient_shares_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}
