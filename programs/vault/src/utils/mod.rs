pub mod validate;
pub mod withdraw;

pub use validate::*;
pub use withdraw::*;
