//! Demo HTTP surface serving envelopes

pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod users;
