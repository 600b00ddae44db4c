use anchor_lang::prelude::*;

use access_control::state::{Role, USER_ROLE_SEED};

use crate::state::*;

#[derive(Accounts)]
pub struct InitAccountantsConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's AccountantAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::AccountantAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + AccountantsConfig::INIT_SPACE,
        seeds = [ACCOUNTANTS_CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, AccountantsConfig>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitAccountant<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: signer's AccountantAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::AccountantAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut, seeds = [ACCOUNTANTS_CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, AccountantsConfig>,

    #[account(
        init,
        payer = signer,
        space = 8 + Accountant::INIT_SPACE,
        seeds = [ACCOUNTANT_SEED, config.next_accountant_index.to_le_bytes().as_ref()],
        bump,
    )]
    pub accountant: Account<'info, Accountant>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateAccountant<'info> {
    pub signer: Signer<'info>,

    /// CHECK: signer's AccountantAdmin record, resolved through access_control::utils::check_role
    #[account(
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::AccountantAdmin.to_seed()],
        bump,
        seeds::program = access_control::ID,
    )]
    pub roles: UncheckedAccount<'info>,

    #[account(mut)]
    pub accountant: Account<'info, Accountant>,
}
