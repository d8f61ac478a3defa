mod create_account;
mod get_account;
mod get_account_by_credentials;
mod helpers;
mod update_account;
