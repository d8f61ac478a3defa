pub mod authenticate_account;
pub mod create_account;
pub mod delete_account;
pub mod get_account;
pub mod update_account;
