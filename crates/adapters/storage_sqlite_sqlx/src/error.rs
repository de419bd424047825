//! Failures of the `SQLite` adapter, surfaced to the core as
//! [`RestoHubError::Storage`].

use restohub_domain::error::RestoHubError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Opening the pool or running a restaurant query failed.
    #[error("sqlite query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// The embedded schema could not be applied.
    #[error("sqlite schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for RestoHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_surface_as_storage_error_in_core() {
        let err = RestoHubError::from(StorageError::from(sqlx::Error::RowNotFound));
        match err {
            RestoHubError::Storage(source) => {
                assert!(source.to_string().starts_with("sqlite query failed"));
            }
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
