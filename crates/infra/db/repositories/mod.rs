pub mod products;
pub mod subscriptions;

use uuid::Uuid;

use crate::domain::repositories::errors::RepositoryError;

/// Record ids are UUIDs in Postgres; anything else is a malformed identifier.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(raw).map_err(|_| RepositoryError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_text_is_accepted() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Ok(id));
    }

    #[test]
    fn non_uuid_text_is_a_malformed_id() {
        for raw in ["", "62bb4ecdba3bbe275f8c7788", "not-an-id"] {
            assert_eq!(
                parse_id(raw),
                Err(RepositoryError::InvalidId(raw.to_string())),
                "input: {raw:?}"
            );
        }
    }
}
