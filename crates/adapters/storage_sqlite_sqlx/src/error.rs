//! Storage-specific error type wrapping sqlx errors.

use userhub_domain::error::UserHubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Opening, querying, or closing the database failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to bootstrap the schema.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for UserHubError {
    fn from(err: StorageError) -> Self {
        Self::StoreUnavailable(Box::new(err))
    }
}
