//! Promotions Domain Concerns

pub mod promotions;
