pub mod strategy_funds;

pub use strategy_funds::*;
