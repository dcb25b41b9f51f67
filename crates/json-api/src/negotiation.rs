//! Accept header negotiation.

use mime::Mime;
use salvo::{
    handler,
    http::header::ACCEPT,
    prelude::{Depot, FlowCtrl, Request, Response, StatusError},
};
use tracing::warn;

/// Media ranges from the `Accept` header, less those refused with `q=0`.
pub(crate) fn acceptable_ranges(req: &Request) -> Vec<Mime> {
    req.accept()
        .into_iter()
        .filter(|range| !refused(range))
        .collect()
}

fn refused(range: &Mime) -> bool {
    range
        .get_param("q")
        .is_some_and(|q| q.as_str().trim().parse::<f32>().is_ok_and(|q| q <= 0.0))
}

/// Whether any of `ranges` admits `media_type`, wildcards included.
pub(crate) fn accepts(ranges: &[Mime], media_type: &Mime) -> bool {
    ranges.iter().any(|range| {
        (range.type_() == mime::STAR || range.type_() == media_type.type_())
            && (range.subtype() == mime::STAR || range.subtype() == media_type.subtype())
    })
}

/// Whether any of `ranges` names `media_type` outright, ignoring wildcards.
pub(crate) fn names(ranges: &[Mime], media_type: &Mime) -> bool {
    ranges.iter().any(|range| {
        range.type_() == media_type.type_() && range.subtype() == media_type.subtype()
    })
}

/// Reject requests whose `Accept` header admits neither JSON nor HTML.
#[handler]
pub(crate) async fn require_acceptable(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.headers().contains_key(ACCEPT) {
        let ranges = acceptable_ranges(req);

        if !accepts(&ranges, &mime::APPLICATION_JSON) && !accepts(&ranges, &mime::TEXT_HTML) {
            warn!(?ranges, "no acceptable representation");

            res.render(StatusError::not_acceptable().brief(
                "Not Acceptable: Only 'application/json' or 'text/html' is supported.",
            ));

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}
