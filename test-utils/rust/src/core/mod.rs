//! Core VM functionality

pub mod accounts;
pub mod state;
pub mod transactions;
pub mod vm;

pub use accounts::AccountManager;
pub use state::StateManager;
pub use transactions::TransactionBuilder;
pub use vm::{Snapshot, Vm};
