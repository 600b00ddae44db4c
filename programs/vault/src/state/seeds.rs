pub const VAULTS_CONFIG_SEED: &[u8] = b"vaults_config";
pub const VAULT_SEED: &[u8] = b"vault";
pub const SHARES_SEED: &[u8] = b"shares";
pub const UNDERLYING_SEED: &[u8] = b"underlying";
pub const USER_DATA_SEED: &[u8] = b"user_data";
