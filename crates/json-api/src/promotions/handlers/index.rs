//! Promotion Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::info;

use promotions_app::domain::promotions::records::{PromotionId, PromotionType};

use crate::{
    extensions::*,
    promotions::{
        errors::{into_status_error, not_found},
        responses::PromotionResponse,
    },
    state::State,
};

/// Promotion Index Handler
///
/// Lists every promotion, or filters by `id`, `name` or `promo_type`. When
/// several filters are given `id` wins, then `name`. Empty values are
/// ignored.
#[endpoint(
    tags("promotions"),
    summary = "List Promotions",
    responses(
        (status_code = StatusCode::OK, description = "Matching promotions"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid filter"),
        (status_code = StatusCode::NOT_FOUND, description = "No promotion with the given id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: QueryParam<String, false>,
    name: QueryParam<String, false>,
    promo_type: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<PromotionResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let promotions = &state.app.promotions;

    let records = if let Some(id) = non_empty(id) {
        info!(id = %id, "filtering promotions by id");

        let promotion = id
            .trim()
            .parse::<i64>()
            .map(PromotionId::from_i64)
            .map_err(|_invalid| StatusError::bad_request().brief("ID must be an integer."))?;

        let found = promotions
            .find_promotion(promotion)
            .await
            .map_err(|error| into_status_error(Some(promotion), error))?
            .ok_or_else(|| not_found(promotion))?;

        vec![found]
    } else if let Some(name) = non_empty(name) {
        info!(name = %name, "filtering promotions by name");

        promotions
            .find_promotions_by_name(name)
            .await
            .map_err(|error| into_status_error(None, error))?
    } else if let Some(promo_type) = non_empty(promo_type) {
        info!(promo_type = %promo_type, "filtering promotions by type");

        let promo_type = promo_type
            .parse::<PromotionType>()
            .map_err(|_unknown| {
                StatusError::bad_request().brief(format!("Invalid promo_type: {promo_type}"))
            })?;

        promotions
            .find_promotions_by_type(promo_type)
            .await
            .map_err(|error| into_status_error(None, error))?
    } else {
        promotions
            .list_promotions()
            .await
            .map_err(|error| into_status_error(None, error))?
    };

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

fn non_empty(param: QueryParam<String, false>) -> Option<String> {
    param.into_inner().filter(|value| !value.is_empty())
}
