//! Promotion Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use promotions_app::domain::promotions::{
    PromotionsServiceError, data::PromotionDataError, records::PromotionId,
};

pub(crate) fn not_found(promotion: PromotionId) -> StatusError {
    StatusError::not_found().brief(format!("Promotion with id '{promotion}' was not found."))
}

pub(crate) fn into_status_error(
    promotion: Option<PromotionId>,
    error: PromotionsServiceError,
) -> StatusError {
    match error {
        PromotionsServiceError::NotFound => match promotion {
            Some(promotion) => not_found(promotion),
            None => StatusError::not_found(),
        },
        PromotionsServiceError::MissingRequiredData | PromotionsServiceError::InvalidData => {
            warn!("storage rejected promotion payload: {error}");

            StatusError::bad_request().brief("Invalid Promotion: rejected by storage")
        }
        PromotionsServiceError::Sql(source) => {
            error!("failed to process promotion: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn invalid_payload(error: &PromotionDataError) -> StatusError {
    warn!("invalid promotion payload: {error}");

    StatusError::bad_request().brief(error.to_string())
}
