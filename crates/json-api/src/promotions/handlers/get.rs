//! Get Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::records::PromotionId;

use crate::{
    extensions::*,
    promotions::{
        errors::{into_status_error, not_found},
        responses::PromotionResponse,
    },
    state::State,
};

/// Get Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Get Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Id is not an integer"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let promotion = PromotionId::from_i64(id.into_inner());

    let found = state
        .app
        .promotions
        .find_promotion(promotion)
        .await
        .map_err(|error| into_status_error(Some(promotion), error))?
        .ok_or_else(|| not_found(promotion))?;

    Ok(Json(found.into()))
}
