use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::subscriptions::SubscriptionModel;

#[automock]
#[async_trait]
pub trait SubscriptionRepository {
    /// Fails with `RepositoryError::InvalidId` for a malformed id and
    /// `RepositoryError::NotFound` when no record exists.
    async fn find_by_id(&self, subscription_id: &str) -> Result<SubscriptionModel>;

    /// Creates the record when it has no id yet, otherwise replaces the stored one.
    /// Returns the record carrying its assigned id.
    async fn save(&self, subscription: SubscriptionModel) -> Result<SubscriptionModel>;
}
