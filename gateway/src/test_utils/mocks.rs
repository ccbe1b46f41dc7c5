//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record how often they were called so tests can verify behavior.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::entities::ForecastResponse;
use crate::domain::ports::ForecastClient;
use crate::error::ForecastError;

type Outcome = Box<dyn Fn() -> Result<ForecastResponse, ForecastError> + Send + Sync>;

// ============================================================================
// Mock Forecast Client
// ============================================================================

pub struct MockForecastClient {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl MockForecastClient {
    /// Always answer with the given weather
    pub fn returning(weather: &str) -> Self {
        let weather = weather.to_string();
        Self {
            outcome: Box::new(move || {
                Ok(ForecastResponse {
                    weather: weather.clone(),
                })
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with the error built by `make_error`
    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> ForecastError + Send + Sync + 'static,
    {
        Self {
            outcome: Box::new(move || Err(make_error())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastClient for MockForecastClient {
    async fn get_forecast(&self) -> Result<ForecastResponse, ForecastError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.outcome)()
    }
}
