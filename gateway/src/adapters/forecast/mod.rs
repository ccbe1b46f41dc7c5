//! Forecast service adapter
//!
//! reqwest-backed implementation of the forecast client port.

pub mod client;

pub use client::ForecastClientImpl;
