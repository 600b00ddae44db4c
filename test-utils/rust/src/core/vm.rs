//! LiteSVM wrapper with impersonation, program registry and failure logs

use std::collections::HashMap;

use dashmap::DashMap;
use litesvm::LiteSVM;
use solana_clock::Clock;
use solana_compute_budget::compute_budget::ComputeBudget;
use solana_sdk::{account::Account, pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::{
    errors::{Result, VmError},
    internal::conversions::to_lite_pubkey,
};

/// Accounts and clock captured by `StateManager::snapshot`
#[derive(Clone)]
pub struct Snapshot {
    pub(crate) accounts: HashMap<Pubkey, Account>,
    pub(crate) timestamp: i64,
    pub(crate) slot: u64,
}

pub struct Vm {
    pub svm: LiteSVM,

    /// Registered keypairs (address -> keypair bytes for cloning)
    keypairs: HashMap<Pubkey, [u8; 64]>,

    prank_address: Option<Pubkey>,
    persistent_prank: bool,

    pub(crate) snapshots: HashMap<u64, Snapshot>,
    pub(crate) next_snapshot_id: u64,

    /// Accounts touched through the VM, restored by `revert`
    pub(crate) modified_accounts: DashMap<Pubkey, ()>,

    program_names: HashMap<Pubkey, String>,

    tx_logs: Vec<Vec<String>>,
    last_error_logs: Option<Vec<String>>,
}

impl Vm {
    pub fn new() -> Self {
        let mut compute_budget = ComputeBudget::new_with_defaults(false);
        compute_budget.compute_unit_limit = 1_400_000;
        let mut svm = LiteSVM::new()
            .with_compute_budget(compute_budget)
            .with_transaction_history(50);

        let now = chrono::Utc::now().timestamp();
        let clock = Clock {
            slot: 1000,
            epoch_start_timestamp: now,
            epoch: 100,
            leader_schedule_epoch: 101,
            unix_timestamp: now,
        };
        svm.set_sysvar::<Clock>(&clock);

        Self {
            svm,
            keypairs: HashMap::new(),
            prank_address: None,
            persistent_prank: false,
            snapshots: HashMap::new(),
            next_snapshot_id: 0,
            modified_accounts: DashMap::new(),
            program_names: HashMap::new(),
            tx_logs: vec![],
            last_error_logs: None,
        }
    }

    pub fn register_keypair(&mut self, keypair: &Keypair) {
        self.keypairs.insert(keypair.pubkey(), keypair.to_bytes());
    }

    pub fn get_keypair(&self, address: &Pubkey) -> Option<Keypair> {
        self.keypairs
            .get(address)
            .and_then(|bytes| Keypair::try_from(bytes.as_slice()).ok())
    }

    /// Sign the next transaction as `address`
    pub fn prank(&mut self, address: Pubkey) {
        self.prank_address = Some(address);
        self.persistent_prank = false;
    }

    /// Sign every transaction as `address` until `stop_prank`
    pub fn start_prank(&mut self, address: Pubkey) {
        self.prank_address = Some(address);
        self.persistent_prank = true;
    }

    pub fn stop_prank(&mut self) {
        self.prank_address = None;
        self.persistent_prank = false;
    }

    pub fn get_prank(&self) -> Option<Pubkey> {
        self.prank_address
    }

    pub fn get_prank_keypair(&self) -> Option<Keypair> {
        self.prank_address.and_then(|addr| self.get_keypair(&addr))
    }

    pub(crate) fn clear_single_prank(&mut self) {
        if !self.persistent_prank {
            self.prank_address = None;
        }
    }

    pub fn add_program(&mut self, program_id: &Pubkey, bytecode: &[u8]) -> Result<()> {
        self.svm
            .add_program(to_lite_pubkey(program_id), bytecode)
            .map_err(|e| VmError::DeploymentFailed(format!("{:?}", e)))
    }

    pub fn add_program_from_file(&mut self, program_id: &Pubkey, file_path: &str) -> Result<()> {
        let bytecode = std::fs::read(file_path)?;
        self.add_program(program_id, &bytecode)?;
        self.program_names
            .insert(*program_id, file_path.to_string());
        Ok(())
    }

    pub fn set_program_name(&mut self, program_id: &Pubkey, name: &str) {
        self.program_names.insert(*program_id, name.to_string());
    }

    pub fn program_name(&self, program_id: &Pubkey) -> Option<&str> {
        self.program_names.get(program_id).map(String::as_str)
    }

    /// Force a fresh blockhash so identical transactions are not deduplicated
    pub fn expire_blockhash(&mut self) {
        self.svm.expire_blockhash();
    }

    pub fn rent(&self) -> solana_sdk::rent::Rent {
        solana_sdk::rent::Rent::default()
    }

    pub fn last_tx_logs(&self) -> Option<&Vec<String>> {
        self.tx_logs.last()
    }

    pub(crate) fn store_tx_logs(&mut self, logs: Vec<String>) {
        self.tx_logs.push(logs);
    }

    pub(crate) fn store_error_logs(&mut self, logs: Vec<String>) {
        if logs.is_empty() {
            self.last_error_logs = None;
        } else {
            self.last_error_logs = Some(logs);
        }
    }

    pub fn clear_last_error_logs(&mut self) {
        self.last_error_logs = None;
    }

    pub fn last_error_logs(&self) -> Option<&Vec<String>> {
        self.last_error_logs.as_ref()
    }

    /// Whether a failure carries `expected_message` in its error or program logs
    pub fn revert_matches(&self, expected_message: &str, err: &VmError) -> bool {
        err.to_string().contains(expected_message)
            || self
                .last_error_logs
                .as_ref()
                .map(|logs| logs.iter().any(|log| log.contains(expected_message)))
                .unwrap_or(false)
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
