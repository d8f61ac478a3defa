pub mod config;
pub mod persistence;

pub use config::{HttpSettings, MongoSettings, Settings, SettingsError};
pub use persistence::{
    STORE_CALL_TIMEOUT, bounded, hashmap_account_store::HashMapAccountStore,
    mongo_account_store::MongoAccountStore,
};
