use anchor_lang::prelude::*;

#[event]
pub struct LogInitVault {
    pub vault: Pubkey,
    pub index: u64,
    pub underlying_mint: Pubkey,
    pub shares_mint: Pubkey,
    pub accountant: Pubkey,
    pub deposit_limit: u64,
}

#[event]
pub struct LogDeposit {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub assets: u64,
    pub shares: u64,
    pub total_assets: u64,
    pub total_shares: u64,
}

#[event]
pub struct LogWithdraw {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub assets: u64,
    pub shares: u64,
    pub total_assets: u64,
    pub total_shares: u64,
}

#[event]
pub struct LogUpdateDepositLimit {
    pub vault: Pubkey,
    pub deposit_limit: u64,
}

#[event]
pub struct LogUpdateMinUserDeposit {
    pub vault: Pubkey,
    pub min_user_deposit: u64,
}

#[event]
pub struct LogUpdateProfitUnlockPeriod {
    pub vault: Pubkey,
    pub profit_unlock_period: u64,
}

#[event]
pub struct LogUpdateWhitelist {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub whitelisted: bool,
}

#[event]
pub struct LogUpdateWhitelistedOnly {
    pub vault: Pubkey,
    pub whitelisted_only: bool,
}

#[event]
pub struct LogUpdateKycVerifiedOnly {
    pub vault: Pubkey,
    pub kyc_verified_only: bool,
}

#[event]
pub struct LogShutdown {
    pub vault: Pubkey,
}

#[event]
pub struct LogAddStrategy {
    pub vault: Pubkey,
    pub strategy: Pubkey,
    pub max_debt: u64,
}

#[event]
pub struct LogRemoveStrategy {
    pub vault: Pubkey,
    pub strategy: Pubkey,
}

#[event]
pub struct LogUpdateMaxDebt {
    pub vault: Pubkey,
    pub strategy: Pubkey,
    pub max_debt: u64,
}

#[event]
pub struct LogUpdateDebt {
    pub vault: Pubkey,
    pub strategy: Pubkey,
    pub old_debt: u64,
    pub new_debt: u64,
}

#[event]
pub struct LogProcessReport {
    pub vault: Pubkey,
    pub strategy: Pubkey,
    pub gain: u64,
    pub loss: u64,
    pub fee_assets: u64,
    pub fee_shares: u64,
    pub net_gain_or_loss: i128,
    pub total_assets: u64,
    pub total_shares: u64,
    pub locked_profit: u64,
}
