//! Promotion Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use promotions_app::domain::promotions::records::PromotionRecord;

/// Wire representation of a stored promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionResponse {
    /// Storage-assigned identifier
    pub id: i64,

    /// Promotion name
    pub name: String,

    /// One of `PERCENT_OFF`, `BOGO` or `AMOUNT_OFF`
    pub promo_type: String,

    /// Product the promotion applies to
    pub product_id: i64,

    /// Discount amount
    pub amount: f64,

    /// First day of the promotion (`YYYY-MM-DD`)
    pub start_date: String,

    /// Last day of the promotion (`YYYY-MM-DD`)
    pub end_date: String,

    /// Whether the promotion is active
    pub status: bool,
}

impl From<PromotionRecord> for PromotionResponse {
    fn from(promotion: PromotionRecord) -> Self {
        PromotionResponse {
            id: promotion.id.into_i64(),
            name: promotion.name,
            promo_type: promotion.promo_type.to_string(),
            product_id: promotion.product_id,
            amount: promotion.amount,
            start_date: promotion.start_date.to_string(),
            end_date: promotion.end_date.to_string(),
            status: promotion.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionActivatedResponse {
    /// Confirmation message
    pub message: String,

    /// Status after activation
    pub status: bool,
}
