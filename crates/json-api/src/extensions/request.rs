//! Request helper extensions.

use mime::Mime;
use salvo::prelude::{Request, StatusError};
use tracing::warn;

pub(crate) trait RequestExt {
    /// Reject anything other than a JSON body with 415.
    ///
    /// Parameters such as `charset` are ignored. A missing or unparseable
    /// header is rejected.
    fn require_json_or_415(&self) -> Result<(), StatusError>;
}

impl RequestExt for Request {
    fn require_json_or_415(&self) -> Result<(), StatusError> {
        let content_type = self.content_type();

        if content_type.as_ref().is_some_and(is_json) {
            return Ok(());
        }

        warn!(?content_type, "invalid content type");

        Err(StatusError::unsupported_media_type()
            .brief(format!("Content-Type must be {}", mime::APPLICATION_JSON)))
    }
}

fn is_json(media_type: &Mime) -> bool {
    media_type.type_() == mime::APPLICATION && media_type.subtype() == mime::JSON
}
