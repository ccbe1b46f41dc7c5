//! Weather service
//!
//! Turns one upstream forecast into the report served to clients.

use std::sync::Arc;

use crate::domain::entities::{ReportField, WeatherReport};
use crate::domain::ports::ForecastClient;
use crate::error::AppError;

pub struct WeatherService {
    forecasts: Arc<dyn ForecastClient>,
    field: ReportField,
}

impl WeatherService {
    pub fn new(forecasts: Arc<dyn ForecastClient>, field: ReportField) -> Self {
        Self { forecasts, field }
    }

    /// Fetch the current forecast and reshape it into a report.
    ///
    /// Issues exactly one upstream call and keeps no state between calls.
    pub async fn current_report(&self) -> Result<WeatherReport, AppError> {
        let forecast = self.forecasts.get_forecast().await?;
        Ok(WeatherReport::from_forecast(forecast, self.field))
    }
}
