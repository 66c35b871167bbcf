use serde::{Deserialize, Serialize};

/// Catalog entry a subscription is bought from.
///
/// `price` is the base price before tax; the tax owed is `price * tax_percentage / 100`
/// on top of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    /// Length of one subscription in calendar months.
    pub subscription_period: u32,
    pub price: f64,
    pub tax_percentage: f64,
}

impl ProductModel {
    pub fn tax_amount(&self) -> f64 {
        self.price * self.tax_percentage / 100.0
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub subscription_period: u32,
    pub price: f64,
    pub tax_percentage: f64,
}

impl From<ProductModel> for ProductDto {
    fn from(value: ProductModel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            subscription_period: value.subscription_period,
            price: value.price,
            tax_percentage: value.tax_percentage,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListDto {
    pub products: Vec<ProductDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_is_added_on_top_of_base_price() {
        let product = ProductModel {
            id: "p1".to_string(),
            name: "monthly".to_string(),
            subscription_period: 1,
            price: 10.0,
            tax_percentage: 10.0,
        };
        assert_eq!(product.tax_amount(), 1.0);
    }

    #[test]
    fn zero_tax_percentage_yields_zero_tax() {
        let product = ProductModel {
            id: "p2".to_string(),
            name: "free tax".to_string(),
            subscription_period: 12,
            price: 99.5,
            tax_percentage: 0.0,
        };
        assert_eq!(product.tax_amount(), 0.0);
    }
}
