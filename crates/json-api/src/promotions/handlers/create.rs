//! Create Promotion Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    promotions::{
        errors::into_status_error,
        requests::{parse_promotion, read_payload},
        responses::PromotionResponse,
    },
    state::State,
};

/// Create Promotion Handler
///
/// Any `id` in the body is ignored; storage assigns a fresh one.
#[endpoint(
    tags("promotions"),
    summary = "Create Promotion",
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "promotions.create",
    skip(req, depot, res),
    fields(promotion_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, StatusError> {
    req.require_json_or_415()?;

    let payload = read_payload(req).await?;
    let promotion = parse_promotion(&payload)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let created = state
        .app
        .promotions
        .create_promotion(promotion)
        .await
        .map_err(|error| into_status_error(None, error))?;

    tracing::Span::current().record("promotion_id", tracing::field::display(created.id));

    res.add_header(LOCATION, format!("/promotions/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
