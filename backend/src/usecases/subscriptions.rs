use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};
use crates::domain::{
    repositories::{products::ProductRepository, subscriptions::SubscriptionRepository},
    value_objects::{
        enums::subscription_statuses::SubscriptionStatus, subscriptions::SubscriptionModel,
    },
};
use tracing::{error, info, warn};

use super::{
    clock::Clock,
    errors::{UseCaseError, UseCaseResult},
    products::ProductUseCase,
};

/// Subscription lifecycle: purchase, lookup and status transitions.
///
/// ```text
/// Active ◄──► Paused
///    │          │
///    ▼          ▼
///      Cancelled
/// ```
pub struct SubscriptionUseCase<P, S, C>
where
    P: ProductRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    catalog: ProductUseCase<P>,
    subscription_repo: Arc<S>,
    clock: Arc<C>,
}

impl<P, S, C> SubscriptionUseCase<P, S, C>
where
    P: ProductRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    pub fn new(product_repo: Arc<P>, subscription_repo: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            catalog: ProductUseCase::new(product_repo),
            subscription_repo,
            clock,
        }
    }

    pub async fn purchase(&self, product_id: &str, email: &str) -> UseCaseResult<SubscriptionModel> {
        info!(%product_id, "subscriptions: purchase requested");

        if product_id.is_empty() || email.is_empty() {
            warn!(%product_id, "subscriptions: purchase missing product id or email");
            return Err(UseCaseError::InvalidArgument(
                "product id and email are required".to_string(),
            ));
        }

        let product = match self.catalog.get_product(product_id).await?.into_iter().next() {
            Some(product) => product,
            None => {
                warn!(%product_id, "subscriptions: product not found for purchase");
                return Err(UseCaseError::NotFound(format!("product {product_id}")));
            }
        };

        let now = self.clock.now();
        let end_date = add_months(now, product.subscription_period)
            .ok_or_else(|| anyhow!("failed to compute subscription end date"))?;

        let subscription = SubscriptionModel {
            id: None,
            email: email.to_string(),
            product_name: product.name.clone(),
            created_at: now,
            updated_at: None,
            start_date: now,
            end_date,
            price: product.price,
            tax: product.tax_amount(),
            status: SubscriptionStatus::Active,
            pause_start_date: None,
        };

        let saved = self
            .subscription_repo
            .save(subscription)
            .await
            .map_err(|err| {
                error!(
                    %product_id,
                    db_error = ?err,
                    "subscriptions: failed to save purchased subscription"
                );
                UseCaseError::Internal(err)
            })?;

        info!(
            subscription_id = saved.id.as_deref().unwrap_or_default(),
            %product_id,
            end_date = %saved.end_date,
            "subscriptions: subscription purchased"
        );
        Ok(saved)
    }

    /// Storage's "record not found" comes back as-is (see `UseCaseError::is_record_not_found`).
    pub async fn get_by_id(&self, subscription_id: &str) -> UseCaseResult<SubscriptionModel> {
        if subscription_id.is_empty() {
            warn!("subscriptions: lookup with empty subscription id");
            return Err(UseCaseError::InvalidArgument(
                "subscription id is required".to_string(),
            ));
        }

        self.load(subscription_id).await
    }

    pub async fn update_status(
        &self,
        subscription_id: &str,
        status: SubscriptionStatus,
    ) -> UseCaseResult<SubscriptionModel> {
        info!(%subscription_id, %status, "subscriptions: status change requested");

        if subscription_id.is_empty() {
            warn!("subscriptions: status change with empty subscription id");
            return Err(UseCaseError::InvalidArgument(
                "subscription id is required".to_string(),
            ));
        }

        let current = self.load(subscription_id).await?;
        let updated = apply_status_change(&current, status, self.clock.now()).map_err(|err| {
            warn!(
                %subscription_id,
                current_status = %current.status,
                requested_status = %status,
                error = %err,
                "subscriptions: status change rejected"
            );
            err
        })?;

        let saved = self
            .subscription_repo
            .save(updated)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to save status change"
                );
                UseCaseError::from_storage(err)
            })?;

        info!(
            %subscription_id,
            from = %current.status,
            to = %saved.status,
            end_date = %saved.end_date,
            "subscriptions: status changed"
        );
        Ok(saved)
    }

    async fn load(&self, subscription_id: &str) -> UseCaseResult<SubscriptionModel> {
        self.subscription_repo
            .find_by_id(subscription_id)
            .await
            .map_err(|err| {
                warn!(
                    %subscription_id,
                    error = %err,
                    "subscriptions: failed to load subscription"
                );
                UseCaseError::from_storage(err)
            })
    }
}

/// Adds calendar months keeping the day of month and time of day. A day past the end of the
/// target month rolls over into the next one, so 2024-01-31 plus one month is 2024-03-02.
pub(crate) fn add_months(start: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let month_index =
        i64::from(start.year()) * 12 + i64::from(start.month0()) + i64::from(months);
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;

    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(start.day0())))?;
    Some(date.and_time(start.time()).and_utc())
}

/// Computes the record that results from moving `current` to `status` at `now`.
///
/// Resuming extends `end_date` by the time spent paused. `pause_start_date` is kept after a
/// resume; the next pause overwrites it.
pub(crate) fn apply_status_change(
    current: &SubscriptionModel,
    status: SubscriptionStatus,
    now: DateTime<Utc>,
) -> UseCaseResult<SubscriptionModel> {
    if status == current.status {
        return Err(UseCaseError::StatusUnchanged);
    }

    let mut updated = current.clone();
    updated.status = status;
    updated.updated_at = Some(now);

    if current.status.is_terminal() {
        return Err(UseCaseError::NotAllowed(
            "cancelled subscription status change".to_string(),
        ));
    }

    match (current.status, status) {
        (SubscriptionStatus::Paused, SubscriptionStatus::Active) => {
            let pause_start = current.pause_start_date.ok_or_else(|| {
                anyhow!(
                    "paused subscription {} has no pause start date",
                    current.id.as_deref().unwrap_or_default()
                )
            })?;
            // A clock that went backwards must not pull the end date in.
            let paused_for = (now - pause_start).max(Duration::zero());
            updated.end_date = current.end_date + paused_for;
        }
        (SubscriptionStatus::Active, SubscriptionStatus::Paused) => {
            updated.pause_start_date = Some(now);
        }
        _ => {}
    }

    Ok(updated)
}
