use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct UserData {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub whitelisted: bool,
    pub bump: u8,
}

impl UserData {
    pub fn set_whitelisted(&mut self, vault: Pubkey, user: Pubkey, whitelisted: bool, bump: u8) {
        self.vault = vault;
        self.user = user;
        self.whitelisted = whitelisted;
        self.bump = bump;
    }

    pub fn allows(&self, vault: &Pubkey, user: &Pubkey) -> bool {
        self.whitelisted && self.vault == *vault && self.user == *user
    }
}
