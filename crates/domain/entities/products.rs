use anyhow::{Context, Result};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::products::ProductModel, infra::db::postgres::schema::products,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = products)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub subscription_period: i32,
    pub price: f64,
    pub tax_percentage: f64,
}

impl TryFrom<ProductEntity> for ProductModel {
    type Error = anyhow::Error;

    fn try_from(value: ProductEntity) -> Result<Self> {
        let subscription_period = u32::try_from(value.subscription_period)
            .with_context(|| format!("product {} has a negative subscription period", value.id))?;

        Ok(Self {
            id: value.id.to_string(),
            name: value.name,
            subscription_period,
            price: value.price,
            tax_percentage: value.tax_percentage,
        })
    }
}
