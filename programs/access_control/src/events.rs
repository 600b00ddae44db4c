use anchor_lang::prelude::*;

use crate::state::Role;

#[event]
pub struct LogInitialize {
    pub owner: Pubkey,
}

#[event]
pub struct LogSetRoleManager {
    pub role: Role,
    pub manager_role: Role,
}

#[event]
pub struct LogSetRole {
    pub role: Role,
    pub user: Pubkey,
    pub granted_by: Pubkey,
}

#[event]
pub struct LogRevokeRole {
    pub role: Role,
    pub user: Pubkey,
    pub revoked_by: Pubkey,
}
