//! Activate Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use promotions_app::domain::promotions::records::PromotionId;

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, responses::PromotionActivatedResponse},
    state::State,
};

/// Activate Promotion Handler
///
/// Activating an already active promotion is a successful no-op.
#[endpoint(
    tags("promotions"),
    summary = "Activate Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion activated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<PromotionActivatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let promotion = PromotionId::from_i64(id.into_inner());

    let activated = state
        .app
        .promotions
        .activate_promotion(promotion)
        .await
        .map_err(|error| into_status_error(Some(promotion), error))?;

    info!(promotion_id = %promotion, "activated promotion");

    Ok(Json(PromotionActivatedResponse {
        message: format!("Promotion {promotion} activated"),
        status: activated.status,
    }))
}
