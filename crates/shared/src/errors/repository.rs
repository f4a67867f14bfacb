use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: SqlxError,
    },

    #[error("Not found")]
    NotFound,

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),
}

impl RepositoryError {
    /// Wraps a store failure with the message of the operation that hit it.
    pub fn database(context: &'static str, source: SqlxError) -> Self {
        Self::Database { context, source }
    }
}
