use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(ACCESS_CONTROL_ALREADY_INITIALIZED)]
    AlreadyInitialized,

    #[msg(ACCESS_CONTROL_UNAUTHORIZED)]
    Unauthorized,

    #[msg(ACCESS_CONTROL_ROLE_MANAGER_CYCLE)]
    RoleManagerCycle,

    #[msg(ACCESS_CONTROL_INVALID_ROLE_MANAGER)]
    InvalidRoleManager,

    #[msg(ACCESS_CONTROL_INVALID_USER)]
    InvalidUser,
}
