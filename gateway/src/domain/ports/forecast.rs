//! Forecast client port trait
//!
//! Defines the interface for fetching the current forecast from upstream.

use async_trait::async_trait;

use crate::domain::entities::ForecastResponse;
use crate::error::ForecastError;

/// Client for the upstream forecast service
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// `GET {base}/forecast`, decoded as a `ForecastResponse`
    async fn get_forecast(&self) -> Result<ForecastResponse, ForecastError>;
}
