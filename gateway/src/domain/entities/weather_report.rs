//! Weather report entity
//!
//! The reshaped body served on `GET /`.

use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::ForecastResponse;
use crate::error::ConfigError;

/// Location reported for every forecast
pub const REPORT_LOCATION: &str = "Seattle";

/// JSON key that carries the upstream weather value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportField {
    /// `{"location": .., "forecast": ..}`
    #[default]
    Forecast,
    /// `{"location": .., "weather": ..}`
    Weather,
}

impl ReportField {
    pub fn key(self) -> &'static str {
        match self {
            ReportField::Forecast => "forecast",
            ReportField::Weather => "weather",
        }
    }
}

impl FromStr for ReportField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forecast" => Ok(ReportField::Forecast),
            "weather" => Ok(ReportField::Weather),
            _ => Err(ConfigError::InvalidReportField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub location: &'static str,
    pub forecast: String,
    pub field: ReportField,
}

impl WeatherReport {
    pub fn from_forecast(forecast: ForecastResponse, field: ReportField) -> Self {
        Self {
            location: REPORT_LOCATION,
            forecast: forecast.weather,
            field,
        }
    }
}

impl Serialize for WeatherReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("location", self.location)?;
        map.serialize_entry(self.field.key(), &self.forecast)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunny() -> ForecastResponse {
        ForecastResponse {
            weather: "sunny".to_string(),
        }
    }

    #[test]
    fn serializes_with_forecast_key() {
        let report = WeatherReport::from_forecast(sunny(), ReportField::Forecast);
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(json, r#"{"location":"Seattle","forecast":"sunny"}"#);
    }

    #[test]
    fn serializes_with_weather_key() {
        let report = WeatherReport::from_forecast(sunny(), ReportField::Weather);
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(json, r#"{"location":"Seattle","weather":"sunny"}"#);
    }

    #[test]
    fn copies_weather_verbatim() {
        let weather = "  light rain, \"heavy\" later \u{2614} ";
        let report = WeatherReport::from_forecast(
            ForecastResponse {
                weather: weather.to_string(),
            },
            ReportField::Forecast,
        );

        assert_eq!(report.location, "Seattle");
        assert_eq!(report.forecast, weather);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["forecast"], weather);
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("forecast".parse::<ReportField>().unwrap(), ReportField::Forecast);
        assert_eq!(" WEATHER ".parse::<ReportField>().unwrap(), ReportField::Weather);
        assert!("location".parse::<ReportField>().is_err());
    }
}
