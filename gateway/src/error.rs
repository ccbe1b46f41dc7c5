//! Unified error types for the forecast gateway
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Startup configuration errors
//! - `ForecastError`: Upstream forecast client errors
//! - `AppError`: Application layer errors (wraps client errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Configuration errors, raised once at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid FORECAST_SERVICE_URI '{value}': {reason}")]
    InvalidUri { value: String, reason: String },

    #[error("Invalid {name}: '{value}' is not a valid positive number")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Invalid REPORT_FIELD '{0}': expected 'forecast' or 'weather'")]
    InvalidReportField(String),
}

/// Upstream forecast service client errors
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<reqwest::Error> for ForecastError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ForecastError::Timeout
        } else if e.is_decode() {
            ForecastError::Deserialization(e.to_string())
        } else {
            ForecastError::Request(e)
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Forecast(e) => {
                tracing::error!("Forecast error: {}", e);
                match e {
                    ForecastError::Request(_) => {
                        (StatusCode::BAD_GATEWAY, "Forecast service unavailable", None)
                    }
                    ForecastError::Timeout => (
                        StatusCode::GATEWAY_TIMEOUT,
                        "Forecast service timed out",
                        None,
                    ),
                    ForecastError::Api { status, .. } => (
                        StatusCode::BAD_GATEWAY,
                        "Forecast service error",
                        Some(format!("upstream returned {}", status)),
                    ),
                    ForecastError::Deserialization(msg) => (
                        StatusCode::BAD_GATEWAY,
                        "Invalid forecast response",
                        Some(msg.clone()),
                    ),
                }
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
