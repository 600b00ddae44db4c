use anchor_lang::prelude::*;

use access_control::{state::Role, utils::has_role};

use strategy::state::Strategy;

use crate::errors::ErrorCodes;
use crate::state::{UserData, Vault};
use crate::ID;

/// Deserializes a strategy passed outside the typed accounts.
pub fn load_strategy(info: &AccountInfo) -> Result<Strategy> {
    if info.owner != &strategy::ID {
        return err!(ErrorCodes::InvalidAccount);
    }

    let data = info.try_borrow_data()?;
    Strategy::try_deserialize(&mut &data[..])
}

/// Reads a `UserData` record without requiring it to exist.
pub fn is_whitelisted(user_data: &AccountInfo, vault: &Pubkey, user: &Pubkey) -> Result<bool> {
    if user_data.owner != &ID || user_data.data_is_empty() {
        return Ok(false);
    }

    let data = user_data.try_borrow_data()?;
    let record = UserData::try_deserialize(&mut &data[..])?;

    Ok(record.allows(vault, user))
}

/// Whitelist and KYC gates are independent. Each applies only when enabled on the vault.
pub fn check_deposit_gates(vault: &Vault, whitelisted: bool, kyc_verified: bool) -> Result<()> {
    if vault.whitelisted_only && !whitelisted {
        return err!(ErrorCodes::NotWhitelisted);
    }

    if vault.kyc_verified_only && !kyc_verified {
        return err!(ErrorCodes::KycRequired);
    }

    Ok(())
}

pub fn verify_deposit_gates(
    vault: &Vault,
    vault_key: &Pubkey,
    user: &Pubkey,
    user_data: &AccountInfo,
    kyc_role: &AccountInfo,
) -> Result<()> {
    let whitelisted = vault.whitelisted_only && is_whitelisted(user_data, vault_key, user)?;
    let kyc_verified = vault.kyc_verified_only && has_role(kyc_role, user, Role::KycVerified)?;

    check_deposit_gates(vault, whitelisted, kyc_verified)
}
