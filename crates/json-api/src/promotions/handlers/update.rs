//! Update Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::records::PromotionId;

use crate::{
    extensions::*,
    promotions::{
        errors::{into_status_error, not_found},
        requests::{check_body_id, parse_promotion, read_payload},
        responses::PromotionResponse,
    },
    state::State,
};

/// Update Promotion Handler
///
/// Replaces every field of the promotion. The path id is authoritative; a
/// body `id` that disagrees with it is rejected.
#[endpoint(
    tags("promotions"),
    summary = "Update Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "promotions.update",
    skip(id, req, depot),
    fields(promotion_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let promotion = PromotionId::from_i64(id.into_inner());

    tracing::Span::current().record("promotion_id", tracing::field::display(promotion));

    req.require_json_or_415()?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let promotions = &state.app.promotions;

    promotions
        .find_promotion(promotion)
        .await
        .map_err(|error| into_status_error(Some(promotion), error))?
        .ok_or_else(|| not_found(promotion))?;

    let payload = read_payload(req).await?;

    check_body_id(&payload, promotion)?;

    let update = parse_promotion(&payload)?;

    let updated = promotions
        .update_promotion(promotion, update)
        .await
        .map_err(|error| into_status_error(Some(promotion), error))?;

    Ok(Json(updated.into()))
}
