use std::{
    sync::{PoisonError, RwLock},
    time::Duration,
};

use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tracing::{info, warn};

use super::error::DbError;
use crate::config::DatabaseConfig;

const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug)]
struct Live {
    client: Client,
    disconnect_timeout: Duration,
}

/// Owns the single MongoDB client of the process.
///
/// Lifecycle is `uninitialized -> connected -> disconnected`. The manager is
/// built once at startup, connected before the listener is bound and
/// disconnected after the server stops. Handlers never touch it directly;
/// they receive collection handles derived from [`ConnectionManager::database`].
#[derive(Debug, Default)]
pub struct ConnectionManager {
    live: RwLock<Option<Live>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn connect_with(cfg: &DatabaseConfig) -> Result<Self, DbError> {
        let manager = Self::new();
        manager.connect(cfg).await?;
        Ok(manager)
    }

    /// Opens the pool and pings the deployment. The client is only stored
    /// once the ping succeeds.
    pub async fn connect(&self, cfg: &DatabaseConfig) -> Result<(), DbError> {
        if self.is_connected() {
            return Err(DbError::AlreadyConnected);
        }

        let mut options = ClientOptions::parse(&cfg.uri)
            .await
            .map_err(DbError::Connection)?;
        options.app_name = Some(APP_NAME.to_string());
        options.max_pool_size = Some(cfg.max_pool_size);
        options.min_pool_size = Some(cfg.min_pool_size);
        options.max_idle_time = Some(cfg.max_idle);
        options.connect_timeout = Some(cfg.connect_timeout);
        options.server_selection_timeout = Some(cfg.server_selection_timeout);

        let client = Client::with_options(options).map_err(DbError::Connection)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(DbError::Connection)?;

        let mut live = self.live.write().unwrap_or_else(PoisonError::into_inner);
        if live.is_some() {
            return Err(DbError::AlreadyConnected);
        }
        *live = Some(Live {
            client,
            disconnect_timeout: cfg.disconnect_timeout,
        });
        info!(
            max_pool_size = cfg.max_pool_size,
            min_pool_size = cfg.min_pool_size,
            "connected to MongoDB"
        );
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.live
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Handle scoped to one logical database. Cheap; shares the pool.
    pub fn database(&self, name: &str) -> Result<Database, DbError> {
        self.live
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|live| live.client.database(name))
            .ok_or(DbError::NotInitialized)
    }

    /// Shuts the client down, bounded by the configured disconnect timeout.
    /// No-op when nothing is connected. The manager is disconnected afterwards
    /// even if the timeout elapsed.
    pub async fn disconnect(&self) -> Result<(), DbError> {
        let live = self
            .live
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(Live {
            client,
            disconnect_timeout,
        }) = live
        else {
            return Ok(());
        };

        match tokio::time::timeout(disconnect_timeout, client.shutdown()).await {
            Ok(()) => {
                info!("disconnected from MongoDB");
                Ok(())
            }
            Err(_) => {
                warn!(timeout = ?disconnect_timeout, "MongoDB disconnect timed out");
                Err(DbError::DisconnectTimeout(disconnect_timeout))
            }
        }
    }
}
