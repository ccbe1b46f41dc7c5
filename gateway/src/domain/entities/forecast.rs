use serde::{Deserialize, Serialize};

/// Payload returned by the upstream forecast service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub weather: String,
}
