pub mod connection;
pub mod dao;
pub mod entities;
pub mod error;

pub use connection::ConnectionManager;
pub use error::DbError;
