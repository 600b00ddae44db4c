pub const CONFIG_SEED: &[u8] = b"config";
pub const ROLE_MANAGERS_SEED: &[u8] = b"role_managers";
pub const USER_ROLE_SEED: &[u8] = b"user_role";
