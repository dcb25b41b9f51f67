//! Promotion Records

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TypedId;

/// Promotion Id
pub type PromotionId = TypedId<PromotionRecord>;

/// Kind of discount a promotion grants.
///
/// The set is closed; values outside it are rejected when a payload is
/// parsed and can never reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionType {
    /// Percentage off the product price.
    PercentOff,

    /// Buy one, get one.
    Bogo,

    /// Fixed amount off the product price.
    AmountOff,
}

impl PromotionType {
    pub const ALL: [Self; 3] = [Self::PercentOff, Self::Bogo, Self::AmountOff];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PercentOff => "PERCENT_OFF",
            Self::Bogo => "BOGO",
            Self::AmountOff => "AMOUNT_OFF",
        }
    }
}

impl fmt::Display for PromotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown promotion type: {0}")]
pub struct UnknownPromotionType(pub String);

impl FromStr for PromotionType {
    type Err = UnknownPromotionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|promo_type| promo_type.as_str() == value)
            .ok_or_else(|| UnknownPromotionType(value.to_string()))
    }
}

/// Promotion Record
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRecord {
    pub id: PromotionId,
    pub name: String,
    pub promo_type: PromotionType,
    pub product_id: i64,
    pub amount: f64,
    pub start_date: Date,
    pub end_date: Date,
    pub status: bool,
}
