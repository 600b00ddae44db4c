use anchor_lang::prelude::*;

use crate::events::*;
use crate::state::*;
use crate::utils::{check_role, has_role as read_role};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let signer = ctx.accounts.signer.key();

    ctx.accounts.config.init(signer, ctx.bumps.config)?;
    ctx.accounts
        .role_managers
        .init(ctx.bumps.role_managers)?;

    let roles_admin = &mut ctx.accounts.signer_roles_admin;
    roles_admin.bind(signer, Role::RolesAdmin, ctx.bumps.signer_roles_admin)?;
    roles_admin.grant();

    emit!(LogInitialize { owner: signer });

    Ok(())
}

pub fn set_role_manager(
    ctx: Context<SetRoleManager>,
    role: Role,
    manager_role: Role,
) -> Result<()> {
    check_role(
        &ctx.accounts.signer_roles_admin,
        &ctx.accounts.signer.key(),
        Role::RolesAdmin,
    )?;

    ctx.accounts
        .role_managers
        .set_manager(role, manager_role)?;

    emit!(LogSetRoleManager { role, manager_role });

    Ok(())
}

pub fn set_role(ctx: Context<SetRole>, role: Role, user: Pubkey) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    let manager_role = ctx.accounts.role_managers.manager_of(role);

    check_role(&ctx.accounts.signer_manager_role, &signer, manager_role)?;

    let user_role = &mut ctx.accounts.user_role;
    user_role.bind(user, role, ctx.bumps.user_role)?;
    user_role.grant();

    emit!(LogSetRole {
        role,
        user,
        granted_by: signer,
    });

    Ok(())
}

/// @notice revokes `role` from `user`. Holders may always renounce their own role.
///         Revoking a role that was never granted succeeds without changing anything.
pub fn revoke_role(ctx: Context<RevokeRole>, role: Role, user: Pubkey) -> Result<()> {
    let signer = ctx.accounts.signer.key();

    if signer != user {
        let manager_role = ctx.accounts.role_managers.manager_of(role);
        check_role(&ctx.accounts.signer_manager_role, &signer, manager_role)?;
    }

    let user_role = &mut ctx.accounts.user_role;
    user_role.bind(user, role, ctx.bumps.user_role)?;
    user_role.revoke();

    emit!(LogRevokeRole {
        role,
        user,
        revoked_by: signer,
    });

    Ok(())
}

pub fn has_role(ctx: Context<HasRole>, role: Role, user: Pubkey) -> Result<bool> {
    read_role(&ctx.accounts.user_role, &user, role)
}
