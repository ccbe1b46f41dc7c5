//! Forecast service client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::forecast_url;
use crate::domain::entities::ForecastResponse;
use crate::domain::ports::ForecastClient;
use crate::error::ForecastError;

/// Implementation of the upstream forecast client
pub struct ForecastClientImpl {
    http: Client,
    forecast_url: String,
}

impl ForecastClientImpl {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ForecastError::Request)?;

        Ok(Self {
            http,
            forecast_url: forecast_url(base_url),
        })
    }

    #[cfg(test)]
    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ForecastError> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ForecastError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ForecastClient for ForecastClientImpl {
    async fn get_forecast(&self) -> Result<ForecastResponse, ForecastError> {
        tracing::debug!("GET {}", self.forecast_url);

        let response = self.http.get(&self.forecast_url).send().await?;
        self.handle_response(response).await
    }
}
