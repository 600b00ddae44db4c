pub const STRATEGY_UNDERLYING_SEED: &[u8] = b"underlying";
pub const INVEST_TRACKER_SEED: &[u8] = b"invest_tracker";
pub const TOKEN_ACCOUNT_SEED: &[u8] = b"token_account";
