use anchor_lang::prelude::*;

#[event]
pub struct LogInitAccountant {
    pub accountant: Pubkey,
    pub index: u64,
    pub performance_fee: u64,
    pub management_fee: u64,
    pub fee_recipient: Pubkey,
}

#[event]
pub struct LogUpdatePerformanceFee {
    pub accountant: Pubkey,
    pub performance_fee: u64,
}

#[event]
pub struct LogUpdateManagementFee {
    pub accountant: Pubkey,
    pub management_fee: u64,
}

#[event]
pub struct LogUpdateFeeRecipient {
    pub accountant: Pubkey,
    pub fee_recipient: Pubkey,
}
