use crates::domain::repositories::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not allowed: {0}")]
    NotAllowed(String),
    #[error("status is unchanged")]
    StatusUnchanged,
    /// Storage or other failures, kept verbatim.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UseCaseError {
    /// Maps a storage failure: a malformed identifier becomes `InvalidArgument`,
    /// everything else (including "record not found") is passed through untouched.
    pub(crate) fn from_storage(err: anyhow::Error) -> Self {
        let invalid_id = matches!(
            RepositoryError::find(&err),
            Some(RepositoryError::InvalidId(_))
        );

        if invalid_id {
            UseCaseError::InvalidArgument(err.to_string())
        } else {
            UseCaseError::Internal(err)
        }
    }

    /// True when storage reported that the requested record does not exist.
    pub fn is_record_not_found(&self) -> bool {
        match self {
            UseCaseError::Internal(err) => {
                matches!(RepositoryError::find(err), Some(RepositoryError::NotFound(_)))
            }
            _ => false,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, UseCaseError>;
