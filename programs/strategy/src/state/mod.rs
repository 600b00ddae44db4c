pub mod strategy_state;
pub use strategy_state::*;

pub mod invest_tracker;
pub use invest_tracker::*;

pub mod context;
pub use context::*;

pub mod seeds;
pub use seeds::*;
