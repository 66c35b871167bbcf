use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::{
        enums::subscription_statuses::SubscriptionStatus, subscriptions::SubscriptionModel,
    },
    infra::db::postgres::schema::user_subscriptions,
};

/// Row of `user_subscriptions`. Doubles as the insert and the upsert changeset.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = user_subscriptions)]
#[diesel(treat_none_as_null = true)]
pub struct SubscriptionEntity {
    pub id: Uuid,
    pub email: String,
    pub product_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub tax: f64,
    pub status: String,
    pub pause_start_date: Option<DateTime<Utc>>,
}

impl SubscriptionEntity {
    pub fn from_model(id: Uuid, model: SubscriptionModel) -> Self {
        Self {
            id,
            email: model.email,
            product_name: model.product_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
            start_date: model.start_date,
            end_date: model.end_date,
            price: model.price,
            tax: model.tax,
            status: model.status.to_string(),
            pause_start_date: model.pause_start_date,
        }
    }
}

impl TryFrom<SubscriptionEntity> for SubscriptionModel {
    type Error = anyhow::Error;

    fn try_from(value: SubscriptionEntity) -> anyhow::Result<Self> {
        Ok(Self {
            id: Some(value.id.to_string()),
            email: value.email,
            product_name: value.product_name,
            created_at: value.created_at,
            updated_at: value.updated_at,
            start_date: value.start_date,
            end_date: value.end_date,
            price: value.price,
            tax: value.tax,
            status: SubscriptionStatus::try_from(value.status.as_str())?,
            pause_start_date: value.pause_start_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_model() -> SubscriptionModel {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        SubscriptionModel {
            id: None,
            email: "buyer@example.com".to_string(),
            product_name: "monthly".to_string(),
            created_at: start,
            updated_at: None,
            start_date: start,
            end_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            price: 10.0,
            tax: 1.0,
            status: SubscriptionStatus::Paused,
            pause_start_date: Some(Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn entity_carries_model_fields_and_given_id() {
        let id = Uuid::new_v4();
        let entity = SubscriptionEntity::from_model(id, sample_model());

        assert_eq!(entity.id, id);
        assert_eq!(entity.status, "paused");
        assert_eq!(entity.pause_start_date, sample_model().pause_start_date);
    }

    #[test]
    fn model_gets_the_row_id() {
        let id = Uuid::new_v4();
        let model =
            SubscriptionModel::try_from(SubscriptionEntity::from_model(id, sample_model())).unwrap();

        assert_eq!(model.id, Some(id.to_string()));
        assert_eq!(model.status, SubscriptionStatus::Paused);
    }

    #[test]
    fn unknown_stored_status_fails_conversion() {
        let mut entity = SubscriptionEntity::from_model(Uuid::new_v4(), sample_model());
        entity.status = "archived".to_string();

        assert!(SubscriptionModel::try_from(entity).is_err());
    }
}
