//! Promotion request payloads.
//!
//! Bodies are read as untyped JSON first so that shape errors, id
//! consistency and field validation can be reported separately and in order.

use salvo::prelude::{Request, StatusError};
use serde_json::Value;

use promotions_app::domain::promotions::{
    data::{PromotionData, whole_number},
    records::PromotionId,
};

use crate::{extensions::*, promotions::errors::invalid_payload};

/// Read the request body as JSON; anything unparseable is a 400.
pub(crate) async fn read_payload(req: &mut Request) -> Result<Value, StatusError> {
    let body = req.payload().await.or_400("could not read request body")?;

    serde_json::from_slice(body).or_400("malformed JSON body")
}

/// A body `id`, when present and not null, must equal the path id.
pub(crate) fn check_body_id(payload: &Value, promotion: PromotionId) -> Result<(), StatusError> {
    match payload.get("id") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Number(id)) if whole_number(id) == Some(promotion.into_i64()) => Ok(()),
        Some(_) => Err(StatusError::bad_request()
            .brief("The id in the request body does not match the resource path.")),
    }
}

pub(crate) fn parse_promotion(payload: &Value) -> Result<PromotionData, StatusError> {
    PromotionData::try_from(payload).map_err(|error| invalid_payload(&error))
}
