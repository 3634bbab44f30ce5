use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load connection settings for the database: {0}")]
    ConnectionConfigError(String),

    /// A failed statement. Display is the raw driver text, which the handler
    /// layer surfaces verbatim in server-error response bodies.
    #[error("{0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Student not found")]
    NotFound,
}
