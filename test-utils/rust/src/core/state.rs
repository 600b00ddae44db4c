//! Clock control and account snapshots

use std::collections::HashMap;

use solana_clock::Clock;

use crate::{
    core::{accounts::AccountManager, vm::Snapshot},
    errors::{Result, VmError},
};

use super::vm::Vm;

pub trait StateManager {
    /// Move the unix timestamp forward by `seconds`
    fn warp_time(&mut self, seconds: i64);

    fn set_timestamp(&mut self, timestamp: i64);

    fn timestamp(&self) -> i64;

    fn warp_slot(&mut self, slot: u64);

    fn slot(&self) -> u64;

    /// Capture every account touched so far along with the clock
    fn snapshot(&mut self) -> u64;

    fn revert(&mut self, snapshot_id: u64) -> Result<()>;
}

impl StateManager for Vm {
    fn warp_time(&mut self, seconds: i64) {
        let mut clock = self.clock();
        clock.unix_timestamp += seconds;
        self.svm.set_sysvar::<Clock>(&clock);
    }

    fn set_timestamp(&mut self, timestamp: i64) {
        let mut clock = self.clock();
        clock.unix_timestamp = timestamp;
        self.svm.set_sysvar::<Clock>(&clock);
    }

    fn timestamp(&self) -> i64 {
        self.clock().unix_timestamp
    }

    fn warp_slot(&mut self, slot: u64) {
        self.svm.warp_to_slot(slot);
    }

    fn slot(&self) -> u64 {
        self.clock().slot
    }

    fn snapshot(&mut self) -> u64 {
        let id = self.next_snapshot_id;
        self.next_snapshot_id += 1;

        let mut accounts = HashMap::new();
        for entry in self.modified_accounts.iter() {
            let pubkey = *entry.key();
            if let Some(account) = self.get_account(&pubkey) {
                accounts.insert(pubkey, account);
            }
        }

        let snapshot = Snapshot {
            accounts,
            timestamp: self.timestamp(),
            slot: self.slot(),
        };
        self.snapshots.insert(id, snapshot);
        id
    }

    fn revert(&mut self, snapshot_id: u64) -> Result<()> {
        let snapshot = self
            .snapshots
            .get(&snapshot_id)
            .ok_or(VmError::SnapshotNotFound(snapshot_id))?
            .clone();

        for (pubkey, account) in snapshot.accounts {
            self.set_account(&pubkey, account)?;
        }

        self.warp_slot(snapshot.slot);
        self.set_timestamp(snapshot.timestamp);
        Ok(())
    }
}

impl Vm {
    pub fn clock(&self) -> Clock {
        self.svm.get_sysvar::<Clock>()
    }

    pub fn warp_days(&mut self, days: u64) {
        self.warp_time((days * 24 * 60 * 60) as i64);
    }
}
