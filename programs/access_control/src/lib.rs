use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod module;
pub mod state;
pub mod utils;

use crate::module::*;
use crate::state::*;

#[cfg(feature = "staging")]
declare_id!("EhegUmc6X8Up5uqFbeDQXTHzymgVdZqek5qWqasUsmnG");

#[cfg(not(feature = "staging"))]
declare_id!("BzyEe9fiLgqZVGjc4wh7XHbzYU23R1EZpZXNeqH7kcU5");

#[program]
pub mod access_control {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        admin::initialize(ctx)
    }

    pub fn set_role_manager(
        ctx: Context<SetRoleManager>,
        role: Role,
        manager_role: Role,
    ) -> Result<()> {
        admin::set_role_manager(ctx, role, manager_role)
    }

    pub fn set_role(ctx: Context<SetRole>, role: Role, user: Pubkey) -> Result<()> {
        admin::set_role(ctx, role, user)
    }

    pub fn revoke_role(ctx: Context<RevokeRole>, role: Role, user: Pubkey) -> Result<()> {
        admin::revoke_role(ctx, role, user)
    }

    pub fn has_role(ctx: Context<HasRole>, role: Role, user: Pubkey) -> Result<bool> {
        admin::has_role(ctx, role, user)
    }
}
