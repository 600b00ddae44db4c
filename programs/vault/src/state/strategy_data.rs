use anchor_lang::prelude::*;

/// Vault-side record of a linked strategy.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct StrategyData {
    pub key: Pubkey,
    pub index: u8,
    pub current_debt: u64, // underlying allocated to the strategy
    pub max_debt: u64,     // allocation ceiling
    pub last_update: i64,  // timestamp of the last processed report, or of linking

    // Watermarks on the strategy's cumulative gain/loss counters already applied here.
    pub reported_gain: u64,
    pub reported_loss: u64,
    pub last_report_id: u64,
}
