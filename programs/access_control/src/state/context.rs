use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + RoleManagers::INIT_SPACE,
        seeds = [ROLE_MANAGERS_SEED],
        bump,
    )]
    pub role_managers: Account<'info, RoleManagers>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + UserRole::INIT_SPACE,
        seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::RolesAdmin.to_seed()],
        bump,
    )]
    pub signer_roles_admin: Account<'info, UserRole>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetRoleManager<'info> {
    pub signer: Signer<'info>,

    /// CHECK: resolved through utils::check_role
    #[account(seeds = [USER_ROLE_SEED, signer.key().as_ref(), Role::RolesAdmin.to_seed()], bump)]
    pub signer_roles_admin: UncheckedAccount<'info>,

    #[account(mut, seeds = [ROLE_MANAGERS_SEED], bump = role_managers.bump)]
    pub role_managers: Account<'info, RoleManagers>,
}

#[derive(Accounts)]
#[instruction(role: Role, user: Pubkey)]
pub struct SetRole<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: role record of the signer for `role`'s manager role, resolved through utils::check_role
    pub signer_manager_role: UncheckedAccount<'info>,

    #[account(seeds = [ROLE_MANAGERS_SEED], bump = role_managers.bump)]
    pub role_managers: Account<'info, RoleManagers>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + UserRole::INIT_SPACE,
        seeds = [USER_ROLE_SEED, user.as_ref(), role.to_seed()],
        bump,
    )]
    pub user_role: Account<'info, UserRole>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(role: Role, user: Pubkey)]
pub struct RevokeRole<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: role record of the signer for `role`'s manager role, ignored on self-revocation
    pub signer_manager_role: UncheckedAccount<'info>,

    #[account(seeds = [ROLE_MANAGERS_SEED], bump = role_managers.bump)]
    pub role_managers: Account<'info, RoleManagers>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + UserRole::INIT_SPACE,
        seeds = [USER_ROLE_SEED, user.as_ref(), role.to_seed()],
        bump,
    )]
    pub user_role: Account<'info, UserRole>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(role: Role, user: Pubkey)]
pub struct HasRole<'info> {
    /// CHECK: may not exist yet, which reads as not granted
    #[account(seeds = [USER_ROLE_SEED, user.as_ref(), role.to_seed()], bump)]
    pub user_role: UncheckedAccount<'info>,
}
