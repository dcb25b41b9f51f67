//! Delete Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::records::PromotionId;

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Delete Promotion Handler
///
/// Deleting a promotion that does not exist still succeeds.
#[endpoint(
    tags("promotions"),
    summary = "Delete Promotion",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Promotion deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Id is not an integer"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let promotion = PromotionId::from_i64(id.into_inner());

    state
        .app
        .promotions
        .delete_promotion(promotion)
        .await
        .map_err(|error| into_status_error(Some(promotion), error))?;

    Ok(StatusCode::NO_CONTENT)
}
