use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::value_objects::enums::subscription_statuses::SubscriptionStatus;

/// One buyer's purchase of one product.
///
/// `id` is `None` until the record has been saved for the first time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionModel {
    pub id: Option<String>,
    pub email: String,
    pub product_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub tax: f64,
    pub status: SubscriptionStatus,
    pub pause_start_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseSubscriptionRequest {
    #[validate(length(min = 1, message = "product_id is required"))]
    pub product_id: String,
    #[validate(
        length(min = 1, message = "email_id is required"),
        email(message = "email_id must be a valid email address")
    )]
    pub email_id: String,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionDto {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub product_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub tax: f64,
    pub status: SubscriptionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_start_date: Option<DateTime<Utc>>,
}

impl From<SubscriptionModel> for SubscriptionDto {
    fn from(value: SubscriptionModel) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            created_at: value.created_at,
            email: value.email,
            product_name: value.product_name,
            start_date: value.start_date,
            end_date: value.end_date,
            price: value.price,
            tax: value.tax,
            status: value.status,
            updated_at: value.updated_at,
            pause_start_date: value.pause_start_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(product_id: &str, email_id: &str) -> PurchaseSubscriptionRequest {
        PurchaseSubscriptionRequest {
            product_id: product_id.to_string(),
            email_id: email_id.to_string(),
        }
    }

    #[test]
    fn well_formed_purchase_request_validates() {
        assert!(request("p1", "testmail@test.com").validate().is_ok());
    }

    #[test]
    fn purchase_request_rejects_bad_input() {
        for (product_id, email_id) in [("", "testmail@test.com"), ("p1", ""), ("p1", "not-an-email")] {
            assert!(
                request(product_id, email_id).validate().is_err(),
                "inputs ({product_id:?}, {email_id:?}) should be rejected"
            );
        }
    }

    #[test]
    fn dto_omits_unset_optional_dates() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dto = SubscriptionDto::from(SubscriptionModel {
            id: Some("sub-1".to_string()),
            email: "a@b.com".to_string(),
            product_name: "monthly".to_string(),
            created_at: start,
            updated_at: None,
            start_date: start,
            end_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            price: 10.0,
            tax: 1.0,
            status: SubscriptionStatus::Active,
            pause_start_date: None,
        });

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], "sub-1");
        assert_eq!(json["status"], "active");
        assert_eq!(json["end_date"], "2024-02-01T00:00:00Z");
        assert!(json.get("updated_at").is_none());
        assert!(json.get("pause_start_date").is_none());
    }
}
