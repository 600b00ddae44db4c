use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(STRATEGY_ALREADY_INITIALIZED)]
    AlreadyInitialized,

    #[msg(STRATEGY_ALREADY_EXISTS)]
    AlreadyExists,

    #[msg(STRATEGY_UNAUTHORIZED)]
    Unauthorized,

    #[msg(STRATEGY_INVALID_STRATEGY_TYPE)]
    InvalidStrategyType,

    #[msg(STRATEGY_MAX_TRACKERS_REACHED)]
    MaxTrackersReached,

    #[msg(STRATEGY_INSUFFICIENT_FUNDS)]
    InsufficientFunds,

    #[msg(STRATEGY_ONLY_VAULT)]
    OnlyVault,

    #[msg(STRATEGY_INVALID_ACCOUNT)]
    InvalidAccount,

    #[msg(STRATEGY_ZERO_AMOUNT)]
    ZeroAmount,
}
