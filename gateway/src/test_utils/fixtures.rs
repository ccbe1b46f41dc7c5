//! Test fixtures
//!
//! Factory functions for creating test state with sensible defaults.

use std::sync::Arc;

use crate::app::WeatherService;
use crate::domain::entities::ReportField;
use crate::domain::ports::ForecastClient;
use crate::AppState;

/// App state backed by the given forecast client
pub fn test_state(client: Arc<dyn ForecastClient>, field: ReportField) -> AppState {
    AppState {
        weather_service: Arc::new(WeatherService::new(client, field)),
    }
}
