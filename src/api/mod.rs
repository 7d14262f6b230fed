//! HTTP API: route handlers and middleware

pub mod app;
pub mod middleware;
pub mod services;

pub use app::build_app;
