pub mod account;
pub mod password;
pub mod requests;
pub mod validation;
