pub mod admin;
pub mod manager;
pub mod user;
