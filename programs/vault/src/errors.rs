use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(VAULT_ALREADY_INITIALIZED)]
    AlreadyInitialized,

    #[msg(VAULT_ZERO_AMOUNT)]
    ZeroAmount,

    #[msg(VAULT_SHUTDOWN)]
    VaultShutdown,

    #[msg(VAULT_BELOW_MINIMUM_DEPOSIT)]
    BelowMinimumDeposit,

    #[msg(VAULT_DEPOSIT_LIMIT_EXCEEDED)]
    DepositLimitExceeded,

    #[msg(VAULT_NOT_WHITELISTED)]
    NotWhitelisted,

    #[msg(VAULT_KYC_REQUIRED)]
    KycRequired,

    #[msg(VAULT_INSUFFICIENT_LIQUIDITY)]
    InsufficientLiquidity,

    #[msg(VAULT_INSUFFICIENT_SHARES)]
    InsufficientShares,

    #[msg(VAULT_INVALID_SHARE_PRICE)]
    InvalidSharePrice,

    #[msg(VAULT_MAX_DEBT_EXCEEDED)]
    MaxDebtExceeded,

    #[msg(VAULT_STRATEGY_NOT_LINKED)]
    StrategyNotLinked,

    #[msg(VAULT_STRATEGY_ALREADY_ADDED)]
    StrategyAlreadyAdded,

    #[msg(VAULT_STRATEGY_HAS_DEBT)]
    StrategyHasDebt,

    #[msg(VAULT_MAX_STRATEGIES_REACHED)]
    MaxStrategiesReached,

    #[msg(VAULT_INVALID_ACCOUNT)]
    InvalidAccount,

    #[msg(VAULT_CPI_TO_STRATEGY_FAILED)]
    VaultCpiToStrategyFailed,
}
