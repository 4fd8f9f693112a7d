use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Customer not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::InvalidCursor(cursor) => {
                ServiceError::InvalidInput(format!("Invalid page cursor: {cursor}"))
            }
            other => ServiceError::Repository(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_maps_to_not_found() {
        let err: ServiceError = RepositoryError::NotFound.into();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn invalid_cursor_maps_to_invalid_input() {
        let err: ServiceError = RepositoryError::InvalidCursor("xyz".to_string()).into();
        assert!(matches!(err, ServiceError::InvalidInput(ref msg) if msg.contains("xyz")));
    }
}
