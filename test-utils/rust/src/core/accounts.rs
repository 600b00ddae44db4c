//! Lamport funding and raw account access

use crate::{
    errors::{Result, VmError},
    internal::conversions::{from_lite_account, to_lite_account, to_lite_pubkey},
};
use solana_sdk::{account::Account, pubkey::Pubkey, signature::Keypair, signer::Signer};

use super::vm::Vm;

pub trait AccountManager {
    fn airdrop(&mut self, pubkey: &Pubkey, lamports: u64) -> Result<()>;

    /// Overwrite an account, tracking it for snapshots
    fn set_account(&mut self, pubkey: &Pubkey, account: Account) -> Result<()>;

    fn get_account(&self, pubkey: &Pubkey) -> Option<Account>;

    /// Create, fund and register a fresh keypair
    fn make_account(&mut self, lamports: u64) -> Keypair;

    fn balance(&self, pubkey: &Pubkey) -> u64;

    fn account_exists(&self, pubkey: &Pubkey) -> bool;
}

impl AccountManager for Vm {
    fn airdrop(&mut self, pubkey: &Pubkey, lamports: u64) -> Result<()> {
        self.svm
            .airdrop(&to_lite_pubkey(pubkey), lamports)
            .map_err(|e| VmError::AirdropFailed(format!("{:?}", e.err)))?;
        self.modified_accounts.insert(*pubkey, ());
        Ok(())
    }

    fn set_account(&mut self, pubkey: &Pubkey, account: Account) -> Result<()> {
        self.svm
            .set_account(to_lite_pubkey(pubkey), to_lite_account(account))
            .map_err(|e| VmError::SetAccountFailed(format!("{:?}", e)))?;
        self.modified_accounts.insert(*pubkey, ());
        Ok(())
    }

    fn get_account(&self, pubkey: &Pubkey) -> Option<Account> {
        self.svm
            .get_account(&to_lite_pubkey(pubkey))
            .map(from_lite_account)
    }

    fn make_account(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        self.airdrop(&keypair.pubkey(), lamports).unwrap();
        self.register_keypair(&keypair);
        keypair
    }

    fn balance(&self, pubkey: &Pubkey) -> u64 {
        self.get_account(pubkey).map(|a| a.lamports).unwrap_or(0)
    }

    fn account_exists(&self, pubkey: &Pubkey) -> bool {
        self.get_account(pubkey)
            .map(|a| a.lamports > 0 || !a.data.is_empty())
            .unwrap_or(false)
    }
}

impl Vm {
    /// Deserialize an Anchor account, checking its discriminator
    pub fn read_anchor_account<T: anchor_lang::AccountDeserialize>(
        &self,
        pubkey: &Pubkey,
    ) -> Result<T> {
        let account = self
            .get_account(pubkey)
            .ok_or_else(|| VmError::AccountNotFound(pubkey.to_string()))?;

        T::try_deserialize(&mut account.data.as_slice())
            .map_err(|e| VmError::DeserializeFailed(e.to_string()))
    }

    /// Account owner, if the account exists
    pub fn owner_of(&self, pubkey: &Pubkey) -> Option<Pubkey> {
        self.get_account(pubkey).map(|a| a.owner)
    }
}
