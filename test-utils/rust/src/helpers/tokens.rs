use solana_sdk::{
    account::Account,
    program_option::COption,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_token::solana_program::program_pack::Pack;
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::{Account as TokenAccount, AccountState, Mint};

use crate::core::{accounts::AccountManager, vm::Vm};
use crate::errors::{Result, VmError};

/// Direct token state manipulation for SPL Token accounts
pub trait TokenHelper {
    fn create_mint(&mut self, authority: &Pubkey, decimals: u8) -> Result<Pubkey>;

    /// Mint owned by `token_program`, e.g. Token-2022 for a mint without extensions
    fn create_mint_with_program(
        &mut self,
        authority: &Pubkey,
        decimals: u8,
        token_program: &Pubkey,
    ) -> Result<Pubkey>;

    /// Set `owner`'s associated token account to hold `amount`
    fn mint_tokens(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Result<()>;

    /// Balance of `owner`'s associated token account, zero when absent
    fn token_balance(&self, owner: &Pubkey, mint: &Pubkey) -> u64;

    fn get_ata(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey;

    /// Write an initialized token account at an arbitrary address
    fn set_token_account(
        &mut self,
        address: &Pubkey,
        mint: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> Result<()>;

    /// Rewrite the amount of an existing token account, keeping mint and owner
    fn set_token_amount(&mut self, address: &Pubkey, amount: u64) -> Result<()>;

    fn token_account_balance(&self, address: &Pubkey) -> u64;

    fn mint_supply(&self, mint: &Pubkey) -> Result<u64>;
}

impl TokenHelper for Vm {
    fn create_mint(&mut self, authority: &Pubkey, decimals: u8) -> Result<Pubkey> {
        self.create_mint_with_program(authority, decimals, &spl_token::id())
    }

    fn create_mint_with_program(
        &mut self,
        authority: &Pubkey,
        decimals: u8,
        token_program: &Pubkey,
    ) -> Result<Pubkey> {
        let mint_pubkey = Keypair::new().pubkey();

        let mut data = vec![0u8; Mint::LEN];
        let mint = Mint {
            mint_authority: COption::Some(*authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        Mint::pack(mint, &mut data).map_err(|e| VmError::TokenError(e.to_string()))?;

        let account = Account {
            lamports: self.rent().minimum_balance(Mint::LEN),
            data,
            owner: *token_program,
            executable: false,
            rent_epoch: 0,
        };
        self.set_account(&mint_pubkey, account)?;
        Ok(mint_pubkey)
    }

    fn mint_tokens(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Result<()> {
        let ata = get_associated_token_address(owner, mint);
        self.set_token_account(&ata, mint, owner, amount)
    }

    fn token_balance(&self, owner: &Pubkey, mint: &Pubkey) -> u64 {
        self.token_account_balance(&get_associated_token_address(owner, mint))
    }

    fn get_ata(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, mint)
    }

    fn set_token_account(
        &mut self,
        address: &Pubkey,
        mint: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        let mut data = vec![0u8; TokenAccount::LEN];
        let token_account = TokenAccount {
            mint: *mint,
            owner: *owner,
            amount,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        TokenAccount::pack(token_account, &mut data)
            .map_err(|e| VmError::TokenError(e.to_string()))?;

        let account = Account {
            lamports: self.rent().minimum_balance(TokenAccount::LEN),
            data,
            owner: spl_token::id(),
            executable: false,
            rent_epoch: 0,
        };
        self.set_account(address, account)
    }

    fn set_token_amount(&mut self, address: &Pubkey, amount: u64) -> Result<()> {
        let mut account = self
            .get_account(address)
            .ok_or_else(|| VmError::AccountNotFound(address.to_string()))?;
        if account.data.len() < TokenAccount::LEN {
            return Err(VmError::TokenError(format!("{} is not a token account", address)));
        }

        let mut token_account = TokenAccount::unpack(&account.data[..TokenAccount::LEN])
            .map_err(|e| VmError::TokenError(e.to_string()))?;
        token_account.amount = amount;
        TokenAccount::pack(token_account, &mut account.data[..TokenAccount::LEN])
            .map_err(|e| VmError::TokenError(e.to_string()))?;

        self.set_account(address, account)
    }

    fn token_account_balance(&self, address: &Pubkey) -> u64 {
        self.get_account(address)
            .filter(|account| account.data.len() >= TokenAccount::LEN)
            .and_then(|account| TokenAccount::unpack(&account.data[..TokenAccount::LEN]).ok())
            .map(|ta| ta.amount)
            .unwrap_or(0)
    }

    fn mint_supply(&self, mint: &Pubkey) -> Result<u64> {
        let account = self
            .get_account(mint)
            .ok_or_else(|| VmError::AccountNotFound(mint.to_string()))?;
        let mint = Mint::unpack(&account.data[..Mint::LEN.min(account.data.len())])
            .map_err(|e| VmError::TokenError(e.to_string()))?;
        Ok(mint.supply)
    }
}
