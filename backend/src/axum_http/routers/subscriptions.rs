use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use crates::{
    domain::{
        repositories::{products::ProductRepository, subscriptions::SubscriptionRepository},
        value_objects::{
            enums::subscription_statuses::SubscriptionStatus,
            subscriptions::{PurchaseSubscriptionRequest, SubscriptionDto},
        },
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{products::ProductPostgres, subscriptions::SubscriptionPostgres},
    },
};
use validator::Validate;

use crate::{
    axum_http::error_responses::AppError,
    usecases::{
        clock::{Clock, SystemClock},
        subscriptions::SubscriptionUseCase,
    },
};

type SharedUseCase<P, S, C> = State<Arc<SubscriptionUseCase<P, S, C>>>;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let product_repository = ProductPostgres::new(Arc::clone(&db_pool));
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let subscription_usecase = SubscriptionUseCase::new(
        Arc::new(product_repository),
        Arc::new(subscription_repository),
        Arc::new(SystemClock),
    );

    router(Arc::new(subscription_usecase))
}

pub fn router<P, S, C>(subscription_usecase: Arc<SubscriptionUseCase<P, S, C>>) -> Router
where
    P: ProductRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/", post(purchase::<P, S, C>))
        .route("/:id", get(get_subscription_by_id::<P, S, C>))
        .route(
            "/:id/changeStatus/:status",
            patch(update_subscription_status::<P, S, C>),
        )
        .with_state(subscription_usecase)
}

/// Maps the path vocabulary onto a subscription status.
pub fn parse_requested_status(raw: &str) -> Option<SubscriptionStatus> {
    match raw {
        "active" => Some(SubscriptionStatus::Active),
        "pause" => Some(SubscriptionStatus::Paused),
        "cancel" => Some(SubscriptionStatus::Cancelled),
        _ => None,
    }
}

pub async fn purchase<P, S, C>(
    State(subscription_usecase): SharedUseCase<P, S, C>,
    payload: Result<Json<PurchaseSubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    P: ProductRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    request
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let subscription = subscription_usecase
        .purchase(&request.product_id, &request.email_id)
        .await?;

    Ok((StatusCode::CREATED, Json(SubscriptionDto::from(subscription))))
}

pub async fn get_subscription_by_id<P, S, C>(
    State(subscription_usecase): SharedUseCase<P, S, C>,
    Path(subscription_id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    P: ProductRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    if subscription_id.trim().is_empty() {
        return Err(AppError::BadRequest("param id cannot be empty".to_string()));
    }

    let subscription = subscription_usecase.get_by_id(&subscription_id).await?;

    Ok(Json(SubscriptionDto::from(subscription)))
}

pub async fn update_subscription_status<P, S, C>(
    State(subscription_usecase): SharedUseCase<P, S, C>,
    Path((subscription_id, status)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError>
where
    P: ProductRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    if subscription_id.trim().is_empty() {
        return Err(AppError::BadRequest("param id cannot be empty".to_string()));
    }

    let status = parse_requested_status(&status)
        .ok_or_else(|| AppError::BadRequest("invalid status value".to_string()))?;

    let subscription = subscription_usecase
        .update_status(&subscription_id, status)
        .await?;

    Ok(Json(SubscriptionDto::from(subscription)))
}
