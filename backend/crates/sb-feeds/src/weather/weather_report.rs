use chrono::{DateTime, Utc};
use serde::Serialize;

pub const TEMPERATURE_UNIT: &str = "F";

/// Conditions at a point in time, imperial units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub temperature: i64,
    pub temperature_unit: &'static str,
    pub condition: String,
    pub description: String,
    pub precipitation_chance: i64,
    pub humidity: i64,
    pub wind_speed: i64,
    pub feels_like: i64,
    pub updated_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Returned whenever the provider cannot be used.
    pub fn fallback(updated_at: DateTime<Utc>) -> Self {
        Self {
            temperature: 72,
            temperature_unit: TEMPERATURE_UNIT,
            condition: "Partly Cloudy".to_string(),
            description: "partly cloudy".to_string(),
            precipitation_chance: 20,
            humidity: 65,
            wind_speed: 8,
            feels_like: 70,
            updated_at,
        }
    }
}
