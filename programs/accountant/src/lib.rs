use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod module;
pub mod state;

use crate::module::*;
use crate::state::*;

#[cfg(feature = "staging")]
declare_id!("FTpztA1E2rq7KCWrqYDDdWpVcauFTxK6LJXQd8VwQEcK");

#[cfg(not(feature = "staging"))]
declare_id!("H4x3vCchintEj5DRCJhp6qwgkx6vrqqWg6Z63NEK9Lf2");

#[program]
pub mod accountant {
    use super::*;

    pub fn init_accountants_config(ctx: Context<InitAccountantsConfig>) -> Result<()> {
        admin::init_accountants_config(ctx)
    }

    pub fn init_accountant(ctx: Context<InitAccountant>, params: AccountantParams) -> Result<()> {
        admin::init_accountant(ctx, params)
    }

    pub fn set_performance_fee(ctx: Context<UpdateAccountant>, fee: u64) -> Result<()> {
        admin::set_performance_fee(ctx, fee)
    }

    pub fn set_management_fee(ctx: Context<UpdateAccountant>, fee: u64) -> Result<()> {
        admin::set_management_fee(ctx, fee)
    }

    pub fn set_fee_recipient(ctx: Context<UpdateAccountant>, recipient: Pubkey) -> Result<()> {
        admin::set_fee_recipient(ctx, recipient)
    }
}
