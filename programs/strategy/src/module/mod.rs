pub mod admin;
pub mod keeper;
pub mod vault;
