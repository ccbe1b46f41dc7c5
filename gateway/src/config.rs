use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::domain::entities::ReportField;
use crate::error::ConfigError;

const DEFAULT_FORECAST_SERVICE_URI: &str = "http://localhost:8080/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream base URI with trailing slashes stripped
    pub forecast_service_uri: String,
    /// Total time allowed for one upstream call
    pub forecast_timeout: Duration,
    /// Output key carrying the upstream weather value
    pub report_field: ReportField,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let forecast_service_uri = normalize_base_uri(
            &var("FORECAST_SERVICE_URI")
                .unwrap_or_else(|| DEFAULT_FORECAST_SERVICE_URI.to_string()),
        )?;

        let timeout_secs = match var("FORECAST_TIMEOUT_SECS") {
            Some(raw) => match parse_number::<u64>("FORECAST_TIMEOUT_SECS", &raw)? {
                0 => {
                    return Err(ConfigError::InvalidNumber {
                        name: "FORECAST_TIMEOUT_SECS",
                        value: raw,
                    })
                }
                secs => secs,
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let report_field = match var("REPORT_FIELD") {
            Some(raw) => raw.parse::<ReportField>()?,
            None => ReportField::default(),
        };

        let port = match var("PORT") {
            Some(raw) => parse_number::<u16>("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            forecast_service_uri,
            forecast_timeout: Duration::from_secs(timeout_secs),
            report_field,
            port,
        })
    }

    /// Full URL of the upstream forecast endpoint
    pub fn forecast_url(&self) -> String {
        forecast_url(&self.forecast_service_uri)
    }
}

/// Join a base URI and the `/forecast` path without doubling the slash.
pub fn forecast_url(base_uri: &str) -> String {
    format!("{}/forecast", base_uri.trim_end_matches('/'))
}

fn normalize_base_uri(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUri {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUri {
            value: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}
