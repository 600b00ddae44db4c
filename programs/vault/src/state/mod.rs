pub mod vault_config;
pub use vault_config::*;

pub mod vault_state;
pub use vault_state::*;

pub mod strategy_data;
pub use strategy_data::*;

pub mod user_data;
pub use user_data::*;

pub mod context;
pub use context::*;

pub mod seeds;
pub use seeds::*;
