//! Testing helpers and utilities

pub mod assertions;
pub mod fixtures;
pub mod tokens;

pub use assertions::{Assertions, ExpectRevertExt, ExpectRevertResultExt, RevertInfo, VmAccess};
pub use fixtures::BaseFixture;
pub use tokens::TokenHelper;
