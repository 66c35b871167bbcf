use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use super::parse_id;
use crate::domain;
use crate::infra::db::postgres::{postgres_connection::PgPoolSquad, schema::user_subscriptions};
use domain::{
    entities::subscriptions::SubscriptionEntity,
    repositories::{errors::RepositoryError, subscriptions::SubscriptionRepository},
    value_objects::subscriptions::SubscriptionModel,
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn find_by_id(&self, subscription_id: &str) -> Result<SubscriptionModel> {
        let id = parse_id(subscription_id)?;
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = user_subscriptions::table
            .filter(user_subscriptions::id.eq(id))
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?
            .ok_or_else(|| RepositoryError::NotFound(subscription_id.to_string()))?;

        SubscriptionModel::try_from(row)
    }

    async fn save(&self, subscription: SubscriptionModel) -> Result<SubscriptionModel> {
        let id = match subscription.id.as_deref() {
            Some(raw) => parse_id(raw)?,
            None => Uuid::new_v4(),
        };
        let entity = SubscriptionEntity::from_model(id, subscription);

        let mut conn = Arc::clone(&self.db_pool).get()?;

        let saved = insert_into(user_subscriptions::table)
            .values(&entity)
            .on_conflict(user_subscriptions::id)
            .do_update()
            .set(&entity)
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        SubscriptionModel::try_from(saved)
    }
}
