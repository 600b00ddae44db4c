use std::path::{Path, PathBuf};

use crate::{core::vm::Vm, errors::Result};
use solana_sdk::pubkey::Pubkey;

/// Builder for a local test VM with the protocol programs deployed
#[derive(Debug, Clone, Default)]
pub struct VmBuilder {
    programs: Vec<ProgramArtifact>,
    timestamp: Option<i64>,
}

impl VmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy a program artifact before running tests.
    pub fn with_program(mut self, artifact: ProgramArtifact) -> Self {
        self.programs.push(artifact);
        self
    }

    /// Start the clock at a fixed unix timestamp instead of wall time.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn build(self) -> Result<Vm> {
        let mut vm = Vm::new();

        if let Some(timestamp) = self.timestamp {
            crate::core::StateManager::set_timestamp(&mut vm, timestamp);
        }

        for artifact in &self.programs {
            let path = artifact.so_path.to_string_lossy().to_string();
            vm.add_program_from_file(&artifact.program_id, &path)?;
            if let Some(name) = &artifact.name {
                vm.set_program_name(&artifact.program_id, name);
            }
            tracing::debug!("deployed {} from {}", artifact.program_id, path);
        }

        Ok(vm)
    }
}

/// Metadata describing a compiled BPF program artifact.
#[derive(Debug, Clone)]
pub struct ProgramArtifact {
    program_id: Pubkey,
    name: Option<String>,
    so_path: PathBuf,
}

impl ProgramArtifact {
    pub fn new(program_id: Pubkey, name: impl Into<String>, so_path: impl Into<PathBuf>) -> Self {
        Self {
            program_id,
            name: Some(name.into()),
            so_path: so_path.into(),
        }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn so_path(&self) -> &Path {
        &self.so_path
    }
}
