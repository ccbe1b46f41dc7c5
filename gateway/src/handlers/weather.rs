//! Weather handler
//!
//! The gateway's single public endpoint.

use axum::{extract::State, Json};

use crate::domain::entities::WeatherReport;
use crate::error::AppError;
use crate::AppState;

/// GET /
///
/// Fetches the upstream forecast and returns it as a Seattle weather report.
/// Upstream failures become 502/504 JSON errors.
pub async fn get_weather(State(state): State<AppState>) -> Result<Json<WeatherReport>, AppError> {
    let report = state.weather_service.current_report().await?;
    Ok(Json(report))
}
