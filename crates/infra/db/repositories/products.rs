use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use super::parse_id;
use crate::domain;
use crate::infra::db::postgres::{postgres_connection::PgPoolSquad, schema::products};
use domain::{
    entities::products::ProductEntity, repositories::products::ProductRepository,
    value_objects::products::ProductModel,
};

pub struct ProductPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ProductPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProductRepository for ProductPostgres {
    async fn find_products(&self, product_id: &str) -> Result<Vec<ProductModel>> {
        let mut query = products::table.into_boxed();
        if !product_id.is_empty() {
            query = query.filter(products::id.eq(parse_id(product_id)?));
        }

        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = query
            .order(products::name.asc())
            .select(ProductEntity::as_select())
            .load::<ProductEntity>(&mut conn)?;

        rows.into_iter().map(ProductModel::try_from).collect()
    }
}
