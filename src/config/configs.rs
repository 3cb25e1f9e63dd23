use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

/// Process configuration read from flat environment variables
/// (`MONGO_URI`, `PORT`, ...). Keys are matched case-insensitively.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub mongo_collection: String,
    pub mongo_max_pool_size: u32,
    pub mongo_min_pool_size: u32,
    pub mongo_max_idle_secs: u64,
    pub mongo_connect_timeout_secs: u64,
    pub mongo_server_selection_timeout_secs: u64,
    pub mongo_disconnect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
            mongo_uri: String::new(),
            mongo_database: defaults::DEFAULT_MONGO_DATABASE.to_string(),
            mongo_collection: defaults::DEFAULT_MONGO_COLLECTION.to_string(),
            mongo_max_pool_size: defaults::DEFAULT_MONGO_MAX_POOL_SIZE,
            mongo_min_pool_size: defaults::DEFAULT_MONGO_MIN_POOL_SIZE,
            mongo_max_idle_secs: defaults::DEFAULT_MONGO_MAX_IDLE_SECS,
            mongo_connect_timeout_secs: defaults::DEFAULT_MONGO_CONNECT_TIMEOUT_SECS,
            mongo_server_selection_timeout_secs:
                defaults::DEFAULT_MONGO_SERVER_SELECTION_TIMEOUT_SECS,
            mongo_disconnect_timeout_secs: defaults::DEFAULT_MONGO_DISCONNECT_TIMEOUT_SECS,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            uri: self.mongo_uri.clone(),
            database: self.mongo_database.clone(),
            collection: self.mongo_collection.clone(),
            max_pool_size: self.mongo_max_pool_size,
            min_pool_size: self.mongo_min_pool_size,
            max_idle: Duration::from_secs(self.mongo_max_idle_secs),
            connect_timeout: Duration::from_secs(self.mongo_connect_timeout_secs),
            server_selection_timeout: Duration::from_secs(
                self.mongo_server_selection_timeout_secs,
            ),
            disconnect_timeout: Duration::from_secs(self.mongo_disconnect_timeout_secs),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

/// Connection settings handed to the connection manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub max_idle: Duration,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
    pub disconnect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn with_uri(uri: impl Into<String>) -> Self {
        AppConfig {
            mongo_uri: uri.into(),
            ..AppConfig::default()
        }
        .database()
    }
}
