pub mod state;
pub use state::*;

pub mod context;
pub use context::*;

pub mod seeds;
pub use seeds::*;
