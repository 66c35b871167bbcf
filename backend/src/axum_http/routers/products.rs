use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use crates::{
    domain::{
        repositories::products::ProductRepository,
        value_objects::products::{ProductDto, ProductListDto},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::products::ProductPostgres,
    },
};

use crate::{axum_http::error_responses::AppError, usecases::products::ProductUseCase};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let product_repository = ProductPostgres::new(Arc::clone(&db_pool));
    let product_usecase = ProductUseCase::new(Arc::new(product_repository));

    router(Arc::new(product_usecase))
}

pub fn router<T>(product_usecase: Arc<ProductUseCase<T>>) -> Router
where
    T: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_all_products::<T>))
        .route("/:id", get(get_product_by_id::<T>))
        .with_state(product_usecase)
}

pub async fn get_all_products<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let products = product_usecase.get_product("").await?;

    Ok(Json(ProductListDto {
        products: products.into_iter().map(ProductDto::from).collect(),
    }))
}

pub async fn get_product_by_id<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    if product_id.trim().is_empty() {
        return Err(AppError::BadRequest("param id cannot be empty".to_string()));
    }

    let product = product_usecase
        .get_product(&product_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("product not found for given id".to_string()))?;

    Ok(Json(ProductDto::from(product)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use crates::domain::{
        repositories::{errors::RepositoryError, products::MockProductRepository},
        value_objects::products::ProductModel,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn sample_product() -> ProductModel {
        ProductModel {
            id: "p1".to_string(),
            name: "monthly".to_string(),
            subscription_period: 1,
            price: 10.0,
            tax_percentage: 10.0,
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_all_products() {
        let mut product_repo = MockProductRepository::new();
        product_repo
            .expect_find_products()
            .returning(|_| Ok(vec![sample_product()]));

        let app = router(Arc::new(ProductUseCase::new(Arc::new(product_repo))));
        let (status, body) = get_json(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["products"][0]["id"], "p1");
        assert_eq!(body["products"][0]["subscription_period"], 1);
        assert_eq!(body["products"][0]["tax_percentage"], 10.0);
    }

    #[tokio::test]
    async fn unknown_product_is_404() {
        let mut product_repo = MockProductRepository::new();
        product_repo
            .expect_find_products()
            .returning(|_| Ok(Vec::new()));

        let app = router(Arc::new(ProductUseCase::new(Arc::new(product_repo))));
        let (status, body) = get_json(app, "/p-missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn malformed_product_id_is_400() {
        let mut product_repo = MockProductRepository::new();
        product_repo
            .expect_find_products()
            .returning(|id| Err(RepositoryError::InvalidId(id.to_string()).into()));

        let app = router(Arc::new(ProductUseCase::new(Arc::new(product_repo))));
        let (status, _) = get_json(app, "/invalidid").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
