//! Root Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::negotiation;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Service descriptor returned to API clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceDescriptor {
    /// Service name
    pub name: String,

    /// API version
    pub version: String,

    /// Where to list promotions
    pub list_endpoint: String,
}

impl Default for ServiceDescriptor {
    fn default() -> Self {
        Self {
            name: "Promotions REST API".to_string(),
            version: "1.0".to_string(),
            list_endpoint: "/api/promotions".to_string(),
        }
    }
}

/// Root handler
///
/// Serves the HTML console to clients that ask for `text/html` by name and
/// the service descriptor to everyone else.
#[endpoint(tags("root"), summary = "Service index")]
pub(crate) async fn handler(req: &mut Request, res: &mut Response) {
    if negotiation::names(&negotiation::acceptable_ranges(req), &mime::TEXT_HTML) {
        res.render(Text::Html(INDEX_HTML));

        return;
    }

    res.render(Json(ServiceDescriptor::default()));
}
