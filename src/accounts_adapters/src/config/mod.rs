pub mod settings;

pub use settings::{HttpSettings, MONGO_URL_ENV_VAR, MongoSettings, Settings, SettingsError};
