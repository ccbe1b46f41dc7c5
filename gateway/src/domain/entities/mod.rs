//! Domain entities
//!
//! Per-request value types. Nothing here outlives a single request.

pub mod forecast;
pub mod weather_report;

pub use forecast::ForecastResponse;
pub use weather_report::{ReportField, WeatherReport};
