use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;
use crate::state::{Role, UserRole, USER_ROLE_SEED};
use crate::ID;

pub fn user_role_address(user: &Pubkey, role: Role) -> Pubkey {
    Pubkey::find_program_address(&[USER_ROLE_SEED, user.as_ref(), role.to_seed()], &ID).0
}

/// Reads a `UserRole` record without requiring it to exist.
/// Records are only ever created by this program at their derived address, so an owned
/// record naming (`user`, `role`) is authoritative.
pub fn has_role(role_account: &AccountInfo, user: &Pubkey, role: Role) -> Result<bool> {
    if role_account.owner != &ID || role_account.data_is_empty() {
        return Ok(false);
    }

    let data = role_account.try_borrow_data()?;
    let record = UserRole::try_deserialize(&mut &data[..])?;

    Ok(record.holds(user, role))
}

/// Authorization guard used by every program in the protocol.
pub fn check_role(role_account: &AccountInfo, user: &Pubkey, role: Role) -> Result<()> {
    if !has_role(role_account, user, role)? {
        msg!("{} lacks role {:?}", user, role);
        return err!(ErrorCodes::Unauthorized);
    }

    Ok(())
}
