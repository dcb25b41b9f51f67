//! Promotion Data

use jiff::civil::Date;
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::domain::promotions::records::PromotionType;

/// Widest name the storage column accepts.
pub const MAX_NAME_LENGTH: usize = 63;

/// Validated promotion fields, as supplied by a create or update payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionData {
    pub name: String,
    pub promo_type: PromotionType,
    pub product_id: i64,
    pub amount: f64,
    pub start_date: Date,
    pub end_date: Date,
    pub status: bool,
}

/// Reasons a promotion payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionDataError {
    /// A required key is absent.
    #[error("Invalid Promotion: missing {0}")]
    Missing(&'static str),

    /// `promo_type` is not one of the supported values.
    #[error("Invalid promo_type: {0}")]
    InvalidPromotionType(String),

    /// A value is present but cannot be coerced to the field's type.
    #[error("Invalid Promotion: bad or malformed data in {field}: {detail}")]
    Malformed { field: &'static str, detail: String },
}

impl PromotionDataError {
    fn malformed(field: &'static str, detail: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            detail: detail.into(),
        }
    }
}

impl TryFrom<&Value> for PromotionData {
    type Error = PromotionDataError;

    /// Fields are checked in declaration order; the first failure wins.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or_else(|| PromotionDataError::malformed("body", "expected a JSON object"))?;

        let name = parse_name(required(object, "name")?)?;
        let promo_type = parse_promo_type(required(object, "promo_type")?)?;
        let product_id = parse_integer("product_id", required(object, "product_id")?)?;
        let amount = parse_amount(required(object, "amount")?)?;
        let start_date = parse_date("start_date", required(object, "start_date")?)?;
        let end_date = parse_date("end_date", required(object, "end_date")?)?;
        let status = parse_status(object.get("status"))?;

        Ok(Self {
            name,
            promo_type,
            product_id,
            amount,
            start_date,
            end_date,
            status,
        })
    }
}

fn required<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, PromotionDataError> {
    object.get(field).ok_or(PromotionDataError::Missing(field))
}

fn parse_name(value: &Value) -> Result<String, PromotionDataError> {
    let name = value
        .as_str()
        .ok_or_else(|| PromotionDataError::malformed("name", "expected a string"))?;

    if name.trim().is_empty() {
        return Err(PromotionDataError::malformed("name", "must not be empty"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(PromotionDataError::malformed(
            "name",
            format!("must be at most {MAX_NAME_LENGTH} characters"),
        ));
    }

    Ok(name.to_string())
}

fn parse_promo_type(value: &Value) -> Result<PromotionType, PromotionDataError> {
    match value {
        Value::String(raw) => raw
            .parse()
            .map_err(|_unknown| PromotionDataError::InvalidPromotionType(raw.clone())),
        other => Err(PromotionDataError::InvalidPromotionType(other.to_string())),
    }
}

/// Two to the 63rd; the exclusive upper bound of `i64` as a float.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Integer value of a JSON number, accepting whole floats such as `7.0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the float is whole and within i64 range before the cast"
)]
pub fn whole_number(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|float| float.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(float))
            .map(|float| float as i64)
    })
}

fn parse_integer(field: &'static str, value: &Value) -> Result<i64, PromotionDataError> {
    match value {
        Value::Number(number) => whole_number(number)
            .ok_or_else(|| PromotionDataError::malformed(field, format!("{number} is not an integer"))),
        Value::String(raw) => raw
            .trim()
            .parse()
            .map_err(|error| PromotionDataError::malformed(field, format!("{raw:?}: {error}"))),
        other => Err(PromotionDataError::malformed(
            field,
            format!("expected an integer, got {other}"),
        )),
    }
}

fn parse_amount(value: &Value) -> Result<f64, PromotionDataError> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };

    amount
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| PromotionDataError::malformed("amount", format!("{value} is not a number")))
}

fn parse_date(field: &'static str, value: &Value) -> Result<Date, PromotionDataError> {
    let raw = value
        .as_str()
        .ok_or_else(|| PromotionDataError::malformed(field, "expected a YYYY-MM-DD string"))?;

    raw.parse::<Date>()
        .map_err(|error| PromotionDataError::malformed(field, format!("{raw:?}: {error}")))
}

fn parse_status(value: Option<&Value>) -> Result<bool, PromotionDataError> {
    match value {
        None => Ok(true),
        Some(Value::Null) => Ok(false),
        Some(Value::Bool(status)) => Ok(*status),
        Some(Value::Number(number)) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        Some(other) => Err(PromotionDataError::malformed(
            "status",
            format!("expected a boolean or number, got {other}"),
        )),
    }
}
