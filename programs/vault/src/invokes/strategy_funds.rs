use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;

pub struct StrategyFundsCpiAccounts<'info> {
    pub strategy_program: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub strategy: AccountInfo<'info>,
    pub underlying_mint: AccountInfo<'info>,
    pub vault_token_account: AccountInfo<'info>,
    pub strategy_token_account: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

impl<'info> StrategyFundsCpiAccounts<'info> {
    fn accounts(&self) -> strategy::cpi::accounts::VaultFunds<'info> {
        strategy::cpi::accounts::VaultFunds {
            vault: self.vault.clone(),
            strategy: self.strategy.clone(),
            underlying_mint: self.underlying_mint.clone(),
            vault_token_account: self.vault_token_account.clone(),
            underlying_token_account: self.strategy_token_account.clone(),
            token_program: self.token_program.clone(),
        }
    }

    /// Moves `amount` from the vault's token account into the strategy.
    pub fn deposit_funds_with_signer(&self, amount: u64, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        let cpi_ctx = CpiContext::new_with_signer(
            self.strategy_program.clone(),
            self.accounts(),
            signer_seeds,
        );

        match strategy::cpi::deposit_funds(cpi_ctx, amount) {
            Ok(_) => Ok(()),
            Err(e) => {
                msg!("VaultCpiToStrategyFailed on deposit_funds: {:?}", e);
                err!(ErrorCodes::VaultCpiToStrategyFailed)
            }
        }
    }

    /// Returns `amount` of the strategy's idle funds to the vault's token account.
    pub fn withdraw_funds_with_signer(
        &self,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        let cpi_ctx = CpiContext::new_with_signer(
            self.strategy_program.clone(),
            self.accounts(),
            signer_seeds,
        );

        match strategy::cpi::withdraw_funds(cpi_ctx, amount) {
            Ok(_) => Ok(()),
            Err(e) => {
                msg!("VaultCpiToStrategyFailed on withdraw_funds: {:?}", e);
                err!(ErrorCodes::VaultCpiToStrategyFailed)
            }
        }
    }
}
