//! Subset of the OpenWeatherMap 2.5 payloads that the reports use.

use super::weather_report::{TEMPERATURE_UNIT, WeatherReport};

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub(crate) list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEntry {
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
    /// Probability of precipitation, 0.0 to 1.0
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

impl CurrentResponse {
    /// `None` when the payload carries no condition entry.
    /// Current conditions have no precipitation probability.
    pub(crate) fn into_report(self, updated_at: DateTime<Utc>) -> Option<WeatherReport> {
        build_report(&self.main, self.weather, &self.wind, 0, updated_at)
    }
}

impl ForecastEntry {
    pub(crate) fn into_report(self, updated_at: DateTime<Utc>) -> Option<WeatherReport> {
        let precipitation_chance = (self.pop * 100.0) as i64;
        build_report(
            &self.main,
            self.weather,
            &self.wind,
            precipitation_chance,
            updated_at,
        )
    }
}

// Whole units truncate toward zero.
fn build_report(
    main: &MainBlock,
    weather: Vec<ConditionBlock>,
    wind: &WindBlock,
    precipitation_chance: i64,
    updated_at: DateTime<Utc>,
) -> Option<WeatherReport> {
    let condition = weather.into_iter().next()?;
    Some(WeatherReport {
        temperature: main.temp as i64,
        temperature_unit: TEMPERATURE_UNIT,
        condition: condition.main,
        description: condition.description,
        precipitation_chance,
        humidity: main.humidity as i64,
        wind_speed: wind.speed as i64,
        feels_like: main.feels_like as i64,
        updated_at,
    })
}
