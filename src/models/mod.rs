pub mod account;
pub mod error;
pub mod policy;
pub mod ticket;
