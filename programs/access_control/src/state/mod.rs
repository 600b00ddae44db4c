pub mod state;
pub use state::*;

pub mod roles;
pub use roles::*;

pub mod context;
pub use context::*;

pub mod seeds;
pub use seeds::*;
