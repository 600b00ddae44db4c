use anchor_lang::prelude::*;

use crate::state::StrategyType;

#[event]
pub struct LogInitStrategy {
    pub strategy: Pubkey,
    pub vault: Pubkey,
    pub index: u8,
    pub strategy_type: StrategyType,
    pub underlying_mint: Pubkey,
    pub manager: Pubkey,
}

#[event]
pub struct LogInitInvestTracker {
    pub strategy: Pubkey,
    pub invest_tracker: Pubkey,
    pub asset_mint: Pubkey,
    pub yield_source: Pubkey,
}

#[event]
pub struct LogInitTokenAccount {
    pub strategy: Pubkey,
    pub token_account: Pubkey,
    pub asset_mint: Pubkey,
}

#[event]
pub struct LogSetManager {
    pub strategy: Pubkey,
    pub manager: Pubkey,
}

#[event]
pub struct LogStrategyReport {
    pub strategy: Pubkey,
    pub report_id: u64,
    pub total_assets: u64,
    pub total_idle: u64,
    pub gain: u64,
    pub loss: u64,
    pub timestamp: i64,
}

#[event]
pub struct LogDepositFunds {
    pub strategy: Pubkey,
    pub amount: u64,
    pub total_assets: u64,
}

#[event]
pub struct LogWithdrawFunds {
    pub strategy: Pubkey,
    pub amount: u64,
    pub total_assets: u64,
}

#[event]
pub struct LogDeployFunds {
    pub strategy: Pubkey,
    pub asset_mint: Pubkey,
    pub amount: u64,
    pub amount_invested: u64,
}

#[event]
pub struct LogFreeFunds {
    pub strategy: Pubkey,
    pub asset_mint: Pubkey,
    pub amount: u64,
    pub amount_invested: u64,
}

#[event]
pub struct LogUpdateInvestTracker {
    pub strategy: Pubkey,
    pub asset_mint: Pubkey,
    pub accrued_value: u64,
    pub slot: u64,
}
