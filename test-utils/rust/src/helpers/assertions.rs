use solana_sdk::pubkey::Pubkey;

use crate::helpers::tokens::TokenHelper;
use crate::{
    core::{accounts::AccountManager, vm::Vm},
    errors::VmError,
};

/// Error and program logs captured from a failed call
#[derive(Debug, Clone)]
pub struct RevertInfo {
    pub error: String,
    pub logs: Vec<String>,
}

impl RevertInfo {
    pub fn contains(&self, message: &str) -> bool {
        self.error.contains(message) || self.logs.iter().any(|log| log.contains(message))
    }
}

pub trait Assertions {
    fn assert_token_balance_eq(&self, owner: &Pubkey, mint: &Pubkey, expected: u64);

    /// Balance of a token account addressed directly, e.g. a program-owned PDA
    fn assert_token_account_eq(&self, address: &Pubkey, expected: u64);

    fn assert_approx_eq(&self, actual: u128, expected: u128, delta: u128);

    fn assert_account_exists(&self, pubkey: &Pubkey);

    fn assert_account_not_exists(&self, pubkey: &Pubkey);
}

impl Assertions for Vm {
    fn assert_token_balance_eq(&self, owner: &Pubkey, mint: &Pubkey, expected: u64) {
        let actual = self.token_balance(owner, mint);
        assert_eq!(
            actual, expected,
            "Token balance mismatch for owner {} mint {}.\nExpected: {}\nActual:   {}",
            owner, mint, expected, actual
        );
    }

    fn assert_token_account_eq(&self, address: &Pubkey, expected: u64) {
        let actual = self.token_account_balance(address);
        assert_eq!(
            actual, expected,
            "Token balance mismatch for account {}.\nExpected: {}\nActual:   {}",
            address, expected, actual
        );
    }

    fn assert_approx_eq(&self, actual: u128, expected: u128, delta: u128) {
        let diff = actual.abs_diff(expected);
        assert!(
            diff <= delta,
            "Values not approximately equal.\nExpected: {}\nActual:   {}\nDiff:     {} (max allowed: {})",
            expected, actual, diff, delta
        );
    }

    fn assert_account_exists(&self, pubkey: &Pubkey) {
        assert!(
            self.account_exists(pubkey),
            "Account {} should exist but does not",
            pubkey
        );
    }

    fn assert_account_not_exists(&self, pubkey: &Pubkey) {
        assert!(
            !self.account_exists(pubkey),
            "Account {} should not exist but does",
            pubkey
        );
    }
}

/// Types that can hand out their underlying [`Vm`]
pub trait VmAccess {
    fn vm_mut(&mut self) -> &mut Vm;
}

impl VmAccess for Vm {
    fn vm_mut(&mut self) -> &mut Vm {
        self
    }
}

/// `expect_revert` style assertions on fixture closures
pub trait ExpectRevertExt: VmAccess {
    /// Run `action` and assert it reverts with the provided `expected_message`.
    fn expect_revert_with<F, T, E>(&mut self, expected_message: &str, action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<VmError>,
    {
        self.expect_revert_any(&[expected_message], action)
    }

    /// Run `action` and assert it reverts with any of the provided `expected_messages`.
    fn expect_revert_any<F, T, E>(&mut self, expected_messages: &[&str], action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<VmError>,
    {
        self.vm_mut().clear_last_error_logs();

        match action(self) {
            Ok(_) => panic!(
                "Expected revert containing {:?}, but the call succeeded",
                expected_messages
            ),
            Err(err) => {
                let vm_error: VmError = err.into();
                let vm = self.vm_mut();
                let logs = vm.last_error_logs().cloned().unwrap_or_default();
                let matched = expected_messages
                    .iter()
                    .any(|expected| vm.revert_matches(expected, &vm_error));

                if !matched {
                    panic!(
                        "Expected revert containing {:?}, but got error: {}\nLogs:\n{}",
                        expected_messages,
                        vm_error,
                        logs.join("\n")
                    );
                }

                RevertInfo {
                    error: vm_error.to_string(),
                    logs,
                }
            }
        }
    }

    /// Run `action` and expect it to fail without checking the specific error.
    fn expect_fail<F, T, E>(&mut self, action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<VmError>,
    {
        self.vm_mut().clear_last_error_logs();

        match action(self) {
            Ok(_) => panic!("Expected action to fail, but it succeeded"),
            Err(err) => {
                let vm_error: VmError = err.into();
                RevertInfo {
                    error: vm_error.to_string(),
                    logs: self.vm_mut().last_error_logs().cloned().unwrap_or_default(),
                }
            }
        }
    }
}

impl<T> ExpectRevertExt for T where T: VmAccess {}

/// Fluent revert checks on a `Result` returned by a fixture call
pub trait ExpectRevertResultExt<T> {
    fn expect_revert_containing(self, vm: &Vm, expected_message: &str) -> RevertInfo;

    fn expect_revert_containing_any(self, vm: &Vm, expected_messages: &[&str]) -> RevertInfo;
}

impl<T, E> ExpectRevertResultExt<T> for std::result::Result<T, E>
where
    E: Into<VmError>,
{
    fn expect_revert_containing(self, vm: &Vm, expected_message: &str) -> RevertInfo {
        self.expect_revert_containing_any(vm, &[expected_message])
    }

    fn expect_revert_containing_any(self, vm: &Vm, expected_messages: &[&str]) -> RevertInfo {
        match self {
            Ok(_) => panic!(
                "Expected revert containing {:?}, but the call succeeded",
                expected_messages
            ),
            Err(err) => {
                let vm_error: VmError = err.into();
                let logs = vm.last_error_logs().cloned().unwrap_or_default();

                if !expected_messages
                    .iter()
                    .any(|expected| vm.revert_matches(expected, &vm_error))
                {
                    panic!(
                        "Expected revert containing {:?}, but got error: {}\nLogs:\n{}",
                        expected_messages,
                        vm_error,
                        logs.join("\n")
                    );
                }

                RevertInfo {
                    error: vm_error.to_string(),
                    logs,
                }
            }
        }
    }
}
