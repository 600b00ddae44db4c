use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;

use library::math::safe_math::*;

#[account]
#[derive(InitSpace, Default)]
pub struct VaultsConfig {
    pub next_vault_index: u64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl VaultsConfig {
    pub fn init(&mut self, bump: u8) -> Result<()> {
        if self.is_initialized {
            return err!(ErrorCodes::AlreadyInitialized);
        }

        self.next_vault_index = 0;
        self.is_initialized = true;
        self.bump = bump;

        Ok(())
    }

    pub fn take_next_index(&mut self) -> Result<u64> {
        let index = self.next_vault_index;
        self.next_vault_index = index.safe_add(1)?;
        Ok(index)
    }
}
