use mongodb::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(mongodb::error::Error),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Unexpected inserted id: {0}")]
    UnexpectedId(String),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: String },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl From<mongodb::error::Error> for DaoLayerError {
    fn from(err: mongodb::error::Error) -> Self {
        if matches!(err.kind.as_ref(), ErrorKind::BsonDeserialization(_)) {
            return DaoLayerError::Decode(err.to_string());
        }
        DaoLayerError::Db(err)
    }
}
