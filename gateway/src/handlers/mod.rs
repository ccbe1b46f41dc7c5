//! HTTP handlers
//!
//! Axum request handlers for the gateway endpoints.

pub mod weather;

pub use weather::get_weather;
