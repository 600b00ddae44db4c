//! Role registry tests: grants, revocations and manager delegation as seen by the vault.

#[cfg(test)]
mod tests {
    use crate::protocol::fixture::{default_vault_params, ProtocolFixture};
    use access_control::state::Role;
    use vault_test_framework::prelude::*;

    fn setup_fixture() -> ProtocolFixture {
        let mut fixture = ProtocolFixture::new().expect("Failed to create protocol fixture");
        fixture
            .setup(default_vault_params())
            .expect("Failed to setup protocol");
        fixture
    }

    /// Test: Should make the initializer RolesAdmin and seed the manager table
    #[test]
    fn test_initialize_registry() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();

        assert!(fixture.has_role(&admin.pubkey(), Role::RolesAdmin));

        let managers = fixture.read_role_managers().unwrap();
        assert_eq!(managers.manager_of(Role::KycVerified), Role::KycProvider);
        assert_eq!(managers.manager_of(Role::VaultsAdmin), Role::RolesAdmin);
        assert_eq!(managers.manager_of(Role::RolesAdmin), Role::RolesAdmin);

        // the registry is initialized once
        fixture.expect_fail(|f| f.init_access_control(&admin));
    }

    /// Test: Should gate vault administration on the granted role
    #[test]
    fn test_granted_role_unlocks_admin_action() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        fixture.expect_revert_with("Unauthorized", |f| f.set_deposit_limit(&alice, 5));

        fixture
            .set_role(&admin, Role::VaultsAdmin, alice.pubkey())
            .unwrap();
        assert!(fixture.has_role(&alice.pubkey(), Role::VaultsAdmin));
        fixture.set_deposit_limit(&alice, 5).unwrap();
        assert_eq!(fixture.read_vault().unwrap().deposit_limit, 5);

        fixture
            .revoke_role(&admin, Role::VaultsAdmin, alice.pubkey())
            .unwrap();
        assert!(!fixture.has_role(&alice.pubkey(), Role::VaultsAdmin));
        fixture.expect_revert_with("Unauthorized", |f| f.set_deposit_limit(&alice, 6));
    }

    /// Test: Should reject grants from accounts without the manager role
    #[test]
    fn test_non_manager_cannot_grant() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.pubkey();
        let alice = fixture.alice.pubkey();
        let bob = fixture.bob.insecure_clone();

        fixture.expect_revert_with("Unauthorized", |f| {
            f.set_role(&bob, Role::VaultsAdmin, alice)
        });
        assert!(!fixture.has_role(&alice, Role::VaultsAdmin));

        fixture.expect_revert_with("Unauthorized", |f| {
            f.revoke_role(&bob, Role::VaultsAdmin, admin)
        });
        assert!(fixture.has_role(&admin, Role::VaultsAdmin));
    }

    /// Test: Should grant idempotently
    #[test]
    fn test_grant_is_idempotent() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.pubkey();

        fixture
            .set_role(&admin, Role::ReportingManager, alice)
            .unwrap();
        fixture
            .set_role(&admin, Role::ReportingManager, alice)
            .unwrap();
        assert!(fixture.has_role(&alice, Role::ReportingManager));
    }

    /// Test: Should let a holder renounce its own role
    #[test]
    fn test_self_revocation() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        fixture
            .set_role(&admin, Role::ReportingManager, alice.pubkey())
            .unwrap();
        fixture
            .revoke_role(&alice, Role::ReportingManager, alice.pubkey())
            .unwrap();

        assert!(!fixture.has_role(&alice.pubkey(), Role::ReportingManager));
    }

    /// Test: Should treat revoking a role that was never granted as a no-op
    #[test]
    fn test_revoke_ungranted_role() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        fixture
            .revoke_role(&admin, Role::KycVerified, bob.pubkey())
            .unwrap();
        fixture
            .revoke_role(&bob, Role::Whitelisted, bob.pubkey())
            .unwrap();

        assert!(!fixture.has_role(&bob.pubkey(), Role::KycVerified));
        assert!(!fixture.has_role(&bob.pubkey(), Role::Whitelisted));
    }

    /// Test: Should let KYC providers attest users without being RolesAdmin
    #[test]
    fn test_kyc_provider_attests_users() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.pubkey();

        fixture
            .set_role(&admin, Role::KycProvider, alice.pubkey())
            .unwrap();
        fixture.set_role(&alice, Role::KycVerified, bob).unwrap();
        assert!(fixture.has_role(&bob, Role::KycVerified));

        // provider powers stop at the attested role
        fixture.expect_revert_with("Unauthorized", |f| {
            f.set_role(&alice, Role::VaultsAdmin, bob)
        });
    }

    /// Test: Should delegate a role to its configured manager role
    #[test]
    fn test_delegated_role_manager() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.pubkey();

        fixture
            .set_role_manager(&admin, Role::ReportingManager, Role::StrategiesManager)
            .unwrap();
        assert_eq!(
            fixture
                .read_role_managers()
                .unwrap()
                .manager_of(Role::ReportingManager),
            Role::StrategiesManager
        );

        fixture
            .set_role(&admin, Role::StrategiesManager, alice.pubkey())
            .unwrap();
        fixture
            .set_role(&alice, Role::ReportingManager, bob)
            .unwrap();
        assert!(fixture.has_role(&bob, Role::ReportingManager));

        // only RolesAdmin edits the manager table
        fixture.expect_revert_with("Unauthorized", |f| {
            f.set_role_manager(&alice, Role::ReportingManager, Role::VaultsAdmin)
        });
    }

    /// Test: Should reject manager assignments that close a cycle
    #[test]
    fn test_role_manager_cycle() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();

        fixture
            .set_role_manager(&admin, Role::VaultsAdmin, Role::ReportingManager)
            .unwrap();

        fixture.expect_revert_with("RoleManagerCycle", |f| {
            f.set_role_manager(&admin, Role::ReportingManager, Role::VaultsAdmin)
        });
        fixture.expect_revert_with("RoleManagerCycle", |f| {
            f.set_role_manager(&admin, Role::StrategiesManager, Role::StrategiesManager)
        });

        // RolesAdmin stays the root of every chain
        fixture.expect_revert_with("InvalidRoleManager", |f| {
            f.set_role_manager(&admin, Role::RolesAdmin, Role::VaultsAdmin)
        });
        fixture
            .set_role_manager(&admin, Role::RolesAdmin, Role::RolesAdmin)
            .unwrap();
    }
}
