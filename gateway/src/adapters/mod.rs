//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod forecast;

pub use forecast::ForecastClientImpl;
