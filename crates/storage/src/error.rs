use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Classifies an error raised by an INSERT, splitting constraint
    /// failures out of the generic database bucket.
    pub fn from_write(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db) if !matches!(db.kind(), ErrorKind::Other) => {
                Self::ConstraintViolation(db.message().to_string())
            }
            _ => Self::Database(error),
        }
    }
}
