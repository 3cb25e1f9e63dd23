use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to connect to MongoDB: {0}")]
    Connection(#[source] mongodb::error::Error),
    #[error("MongoDB connection not initialized")]
    NotInitialized,
    #[error("MongoDB connection already initialized")]
    AlreadyConnected,
    #[error("MongoDB disconnect did not finish within {0:?}")]
    DisconnectTimeout(Duration),
}
