use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;
use crate::state::roles::{Role, ROLE_COUNT};

#[account]
#[derive(InitSpace, Default)]
pub struct Config {
    pub owner: Pubkey, // Account that initialized the registry, implicit first RolesAdmin
    pub bump: u8,
}

impl Config {
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn init(&mut self, owner: Pubkey, bump: u8) -> Result<()> {
        if self.is_initialized() {
            return err!(ErrorCodes::AlreadyInitialized);
        }

        self.owner = owner;
        self.bump = bump;

        Ok(())
    }
}

/// Which role may grant/revoke each role, indexed by `Role::index()`.
/// An empty slot falls back to `RolesAdmin`.
#[account]
#[derive(InitSpace, Default)]
pub struct RoleManagers {
    pub managers: [Option<Role>; ROLE_COUNT],
    pub bump: u8,
}

impl RoleManagers {
    pub fn init(&mut self, bump: u8) -> Result<()> {
        self.managers = [None; ROLE_COUNT];
        // KYC attestations are delegated to providers out of the box
        self.managers[Role::KycVerified.index()] = Some(Role::KycProvider);
        self.bump = bump;

        Ok(())
    }

    pub fn manager_of(&self, role: Role) -> Role {
        self.managers[role.index()].unwrap_or(Role::RolesAdmin)
    }

    /// Walks the manager chain starting at `manager_role`; the table is acyclic, so every
    /// chain ends at `RolesAdmin` within `ROLE_COUNT` hops unless it passes through `role`.
    pub fn would_cycle(&self, role: Role, manager_role: Role) -> bool {
        let mut current = manager_role;

        for _ in 0..=ROLE_COUNT {
            if current == role {
                return true;
            }
            if current == Role::RolesAdmin {
                return false;
            }
            current = self.manager_of(current);
        }

        true
    }

    pub fn set_manager(&mut self, role: Role, manager_role: Role) -> Result<()> {
        if role == Role::RolesAdmin {
            // root of every chain, always managed by itself
            if manager_role != Role::RolesAdmin {
                return err!(ErrorCodes::InvalidRoleManager);
            }
            return Ok(());
        }

        if self.would_cycle(role, manager_role) {
            return err!(ErrorCodes::RoleManagerCycle);
        }

        self.managers[role.index()] = Some(manager_role);

        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct UserRole {
    pub user: Pubkey,
    pub role: Role,
    pub has_role: bool,
    pub bump: u8,
}

impl UserRole {
    /// Stamps identity on a record created on first touch.
    pub fn bind(&mut self, user: Pubkey, role: Role, bump: u8) -> Result<()> {
        if self.user == Pubkey::default() {
            self.user = user;
            self.role = role;
            self.bump = bump;
        }

        if self.user != user || self.role != role {
            return err!(ErrorCodes::InvalidUser);
        }

        Ok(())
    }

    pub fn grant(&mut self) {
        self.has_role = true;
    }

    pub fn revoke(&mut self) {
        self.has_role = false;
    }

    pub fn holds(&self, user: &Pubkey, role: Role) -> bool {
        self.has_role && self.user == *user && self.role == role
    }
}
