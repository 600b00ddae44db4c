//! Transaction building and execution

use std::collections::HashSet;

use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use solana_keypair::Keypair as LiteKeypair;
use solana_message::{Message, VersionedMessage};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use solana_transaction::versioned::VersionedTransaction;

use crate::{
    core::vm::Vm,
    errors::{Result, VmError},
    internal::conversions::{to_lite_instruction, to_lite_pubkey},
};

pub struct TransactionBuilder<'vm> {
    vm: &'vm mut Vm,
    instructions: Vec<Instruction>,
    signers: Vec<Keypair>,
    /// Accounts named by the instructions, tracked for snapshots
    referenced_accounts: HashSet<Pubkey>,
}

impl<'vm> TransactionBuilder<'vm> {
    pub fn new(vm: &'vm mut Vm) -> Self {
        Self {
            vm,
            instructions: vec![],
            signers: vec![],
            referenced_accounts: HashSet::new(),
        }
    }

    pub fn instruction(mut self, ix: Instruction) -> Self {
        self.track(&ix);
        self.instructions.push(ix);
        self
    }

    pub fn instructions(mut self, ixs: Vec<Instruction>) -> Self {
        for ix in &ixs {
            self.track(ix);
        }
        self.instructions.extend(ixs);
        self
    }

    /// Add a signer; the first one pays fees
    pub fn signer(mut self, keypair: &Keypair) -> Self {
        self.signers.push(keypair.insecure_clone());
        self
    }

    fn track(&mut self, ix: &Instruction) {
        for meta in &ix.accounts {
            self.referenced_accounts.insert(meta.pubkey);
        }
        self.referenced_accounts.insert(ix.program_id);
    }

    pub fn execute(self) -> Result<TransactionMetadata> {
        let referenced_accounts = self.referenced_accounts.clone();
        let (tx, vm) = self.build_transaction()?;

        vm.clear_single_prank();

        match vm.svm.send_transaction(tx) {
            Ok(metadata) => {
                vm.clear_last_error_logs();
                for pubkey in referenced_accounts {
                    vm.modified_accounts.insert(pubkey, ());
                }
                vm.store_tx_logs(metadata.logs.clone());
                Ok(metadata)
            }
            Err(e) => {
                vm.store_error_logs(e.meta.logs.clone());
                Err(VmError::TransactionFailed(format_failed_transaction(&e)))
            }
        }
    }

    fn build_transaction(self) -> Result<(VersionedTransaction, &'vm mut Vm)> {
        let mut signers = self.signers;
        if signers.is_empty() {
            match self.vm.get_prank_keypair() {
                Some(prank_signer) => signers.push(prank_signer),
                None => return Err(VmError::NoSigners),
            }
        }

        // Identical instructions from one test would otherwise share a signature
        self.vm.expire_blockhash();
        let recent_blockhash = self.vm.svm.latest_blockhash();

        let lite_instructions: Vec<_> = self
            .instructions
            .into_iter()
            .map(to_lite_instruction)
            .collect();
        let lite_payer = to_lite_pubkey(&signers[0].pubkey());

        let message =
            Message::new_with_blockhash(&lite_instructions, Some(&lite_payer), &recent_blockhash);

        let lite_signers = signers
            .iter()
            .map(|s| LiteKeypair::try_from(&s.to_bytes()[..]))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| VmError::TransactionFailed(format!("Invalid signer: {}", e)))?;
        let lite_signer_refs: Vec<&LiteKeypair> = lite_signers.iter().collect();

        let tx = VersionedTransaction::try_new(VersionedMessage::Legacy(message), &lite_signer_refs)
            .map_err(|e| VmError::TransactionFailed(format!("Failed to create tx: {}", e)))?;

        Ok((tx, self.vm))
    }
}

fn format_failed_transaction(err: &FailedTransactionMetadata) -> String {
    if err.meta.logs.is_empty() {
        format!("{:?}", err.err)
    } else {
        format!("{:?}\nProgram logs:\n{}", err.err, err.meta.logs.join("\n"))
    }
}

impl Vm {
    pub fn tx(&mut self) -> TransactionBuilder<'_> {
        TransactionBuilder::new(self)
    }

    pub fn execute_instruction(
        &mut self,
        ix: Instruction,
        signer: &Keypair,
    ) -> Result<TransactionMetadata> {
        self.tx().instruction(ix).signer(signer).execute()
    }

    /// Execute as the pranked keypair; requires `prank()` or `start_prank()`
    pub fn execute_as_prank(&mut self, ix: Instruction) -> Result<TransactionMetadata> {
        let signer = self.get_prank_keypair().ok_or_else(|| {
            VmError::Custom("No prank address set or keypair not registered".to_string())
        })?;
        self.tx().instruction(ix).signer(&signer).execute()
    }
}
