use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(ACCOUNTANT_ALREADY_INITIALIZED)]
    AlreadyInitialized,

    #[msg(ACCOUNTANT_INVALID_CONFIGURATION)]
    InvalidConfiguration,

    #[msg(ACCOUNTANT_INVALID_FEE_RECIPIENT)]
    InvalidFeeRecipient,
}
