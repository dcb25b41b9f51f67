//! App Router

use salvo::Router;

use crate::{healthcheck, index, negotiation, promotions};

/// The promotions resource, mounted under `path`.
fn promotions_router(path: &str) -> Router {
    Router::with_path(path)
        .get(promotions::index::handler)
        .post(promotions::create::handler)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("{id}")
                .get(promotions::get::handler)
                .put(promotions::update::handler)
                .delete(promotions::delete::handler)
                .push(Router::with_path("activate").put(promotions::activate::handler))
                .push(
                    Router::with_path("deactivate")
                        .put(promotions::deactivate::handler)
                        .delete(promotions::deactivate::handler),
                ),
        )
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(negotiation::require_acceptable)
        .get(index::handler)
        .push(promotions_router("promotions"))
        .push(promotions_router("api/promotions"))
}
