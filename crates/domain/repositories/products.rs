use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::products::ProductModel;

#[automock]
#[async_trait]
pub trait ProductRepository {
    /// Returns every product when `product_id` is empty, otherwise zero or one product.
    ///
    /// A malformed `product_id` fails with `RepositoryError::InvalidId`.
    async fn find_products(&self, product_id: &str) -> Result<Vec<ProductModel>>;
}
