// Runtime settings for the service binary.
//
// Settings come from an optional `timesheets.toml` in the working directory, overridden
// by `TIMESHEETS_` prefixed environment variables (`TIMESHEETS_PORT=9000`). Without a
// database url the service runs on the in memory store.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "timesheets.toml";
pub const ENV_PREFIX: &str = "TIMESHEETS_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] Box<figment::Error>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: Option<SecretString>,
    pub max_connections: u32,
    pub log_filter: String,
}

#[derive(Serialize)]
struct Defaults {
    host: &'static str,
    port: u16,
    max_connections: u32,
    log_filter: &'static str,
}

const DEFAULTS: Defaults = Defaults {
    host: "0.0.0.0",
    port: 8080,
    max_connections: 10,
    log_filter: "info",
};

impl Settings {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(DEFAULTS))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }
}
