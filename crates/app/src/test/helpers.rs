//! Test Helpers

use jiff::civil::date;

use crate::domain::promotions::{data::PromotionData, records::PromotionType};

/// A valid ten-percent-off promotion for June 2025.
pub(crate) fn promotion_data(name: &str) -> PromotionData {
    PromotionData {
        name: name.to_string(),
        promo_type: PromotionType::PercentOff,
        product_id: 123,
        amount: 10.0,
        start_date: date(2025, 6, 1),
        end_date: date(2025, 6, 30),
        status: true,
    }
}
