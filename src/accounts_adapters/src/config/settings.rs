use std::{path::Path, time::Duration};

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

pub const MONGO_URL_ENV_VAR: &str = "MONGO_URL";
pub const ENV_PREFIX: &str = "ACCOUNTS";

const MIB: usize = 1 << 20;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("{MONGO_URL_ENV_VAR} must be set")]
    MissingMongoUrl,
    #[error("http.maxHeaderBytes of {0} MiB does not fit in memory")]
    MaxHeaderBytesTooLarge(usize),
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub http: HttpSettings,
    pub mongo: MongoSettings,
}

// Environment overrides arrive lowercased, hence the aliases.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpSettings {
    pub port: u16,
    /// Seconds allowed for reading a request body.
    #[serde(alias = "readtimeout")]
    pub read_timeout: u64,
    /// Seconds allowed for producing a response.
    #[serde(alias = "writetimeout")]
    pub write_timeout: u64,
    /// Header buffer limit in MiB.
    #[serde(alias = "maxheaderbytes")]
    pub max_header_bytes: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            read_timeout: 20,
            write_timeout: 20,
            max_header_bytes: 1,
        }
    }
}

impl HttpSettings {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout)
    }

    /// Header buffer limit in bytes, saturating on overflow.
    pub fn max_header_bytes(&self) -> usize {
        self.max_header_bytes.saturating_mul(MIB)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoSettings {
    pub url: Secret<String>,
    pub database: String,
    pub collection: String,
}

impl Settings {
    /// Reads `path` as YAML, applies `ACCOUNTS__*` overrides and takes the
    /// connection URL from `MONGO_URL`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::from_sources(
            path.as_ref(),
            std::env::var(MONGO_URL_ENV_VAR).ok(),
            Environment::with_prefix(ENV_PREFIX).separator("__"),
        )
    }

    fn from_sources(
        path: &Path,
        mongo_url: Option<String>,
        environment: Environment,
    ) -> Result<Self, SettingsError> {
        let mongo_url = mongo_url
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingMongoUrl)?;

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(environment)
            .set_override("mongo.url", mongo_url)?
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        if settings.http.max_header_bytes.checked_mul(MIB).is_none() {
            return Err(SettingsError::MaxHeaderBytesTooLarge(
                settings.http.max_header_bytes,
            ));
        }

        Ok(settings)
    }
}
