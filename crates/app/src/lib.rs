//! Promotions domain, persistence and application context.

pub mod context;
pub mod database;
pub mod domain;


mod ids;
