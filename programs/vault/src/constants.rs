/// Upper bound on strategies linked to one vault.
pub const MAX_STRATEGIES: usize = 10;

/// Remaining accounts per strategy in `withdraw`: the strategy and its underlying token account.
pub const WITHDRAW_ACCOUNTS_PER_STRATEGY: usize = 2;
