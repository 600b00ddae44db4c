pub const ACCOUNTANTS_CONFIG_SEED: &[u8] = b"accountants_config";
pub const ACCOUNTANT_SEED: &[u8] = b"accountant";
