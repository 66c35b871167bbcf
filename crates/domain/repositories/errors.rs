use thiserror::Error;

/// Conditions storage adapters report so callers can tell them apart from plain failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("malformed identifier: {0}")]
    InvalidId(String),
    #[error("record not found: {0}")]
    NotFound(String),
}

impl RepositoryError {
    /// Finds a `RepositoryError` anywhere in an `anyhow` chain.
    pub fn find(err: &anyhow::Error) -> Option<&RepositoryError> {
        err.chain().find_map(|cause| cause.downcast_ref::<RepositoryError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn find_sees_through_added_context() {
        let err = Err::<(), _>(RepositoryError::NotFound("abc".to_string()))
            .context("loading subscription")
            .unwrap_err();

        assert_eq!(
            RepositoryError::find(&err),
            Some(&RepositoryError::NotFound("abc".to_string()))
        );
    }

    #[test]
    fn find_ignores_unrelated_errors() {
        let err = anyhow::anyhow!("connection refused");
        assert!(RepositoryError::find(&err).is_none());
    }
}
