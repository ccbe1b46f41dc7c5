//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod weather_service;

pub use weather_service::WeatherService;
