use std::sync::Arc;

use crates::domain::{
    repositories::products::ProductRepository, value_objects::products::ProductModel,
};
use tracing::{error, info, warn};

use super::errors::{UseCaseError, UseCaseResult};

/// Catalog lookup.
pub struct ProductUseCase<P>
where
    P: ProductRepository + Send + Sync + 'static,
{
    product_repo: Arc<P>,
}

impl<P> ProductUseCase<P>
where
    P: ProductRepository + Send + Sync + 'static,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    /// Every product for an empty `product_id`, otherwise zero or one product.
    /// An empty result means "not found" and is left for the caller to interpret.
    pub async fn get_product(&self, product_id: &str) -> UseCaseResult<Vec<ProductModel>> {
        let products = self
            .product_repo
            .find_products(product_id)
            .await
            .map_err(|err| {
                let err = UseCaseError::from_storage(err);
                match &err {
                    UseCaseError::InvalidArgument(_) => {
                        warn!(%product_id, error = %err, "products: rejected product id")
                    }
                    _ => error!(%product_id, db_error = ?err, "products: failed to load products"),
                }
                err
            })?;

        let product_count = products.len();
        info!(%product_id, product_count, "products: products loaded");
        Ok(products)
    }
}
