//! Promotions resource

mod errors;
pub(crate) mod handlers;
mod requests;
pub(crate) mod responses;

pub(crate) use handlers::*;
