use anchor_lang::prelude::*;

pub const ROLE_COUNT: usize = 8;

/// Capability tags. The discriminant doubles as the slot in the role manager table.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Role {
    RolesAdmin,
    VaultsAdmin,
    ReportingManager,
    StrategiesManager,
    AccountantAdmin,
    KycProvider,
    KycVerified,
    Whitelisted,
}

impl Role {
    pub const ALL: [Role; ROLE_COUNT] = [
        Role::RolesAdmin,
        Role::VaultsAdmin,
        Role::ReportingManager,
        Role::StrategiesManager,
        Role::AccountantAdmin,
        Role::KycProvider,
        Role::KycVerified,
        Role::Whitelisted,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Role name used as the last seed of a user role record.
    pub fn to_seed(&self) -> &'static [u8] {
        match self {
            Role::RolesAdmin => b"roles_admin",
            Role::VaultsAdmin => b"vaults_admin",
            Role::ReportingManager => b"reporting_manager",
            Role::StrategiesManager => b"strategies_manager",
            Role::AccountantAdmin => b"accountant_admin",
            Role::KycProvider => b"kyc_provider",
            Role::KycVerified => b"kyc_verified",
            Role::Whitelisted => b"whitelisted",
        }
    }
}
