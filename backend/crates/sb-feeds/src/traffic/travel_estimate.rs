use crate::{Coordinates, TrafficLevel, TravelMode};

use chrono::{DateTime, Utc};
use serde::Serialize;

const MILES_PER_METER: f64 = 0.000621371;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelEstimate {
    pub distance_meters: i64,
    pub distance_miles: f64,
    pub duration_seconds: i64,
    pub duration_minutes: i64,
    pub duration_in_traffic_seconds: i64,
    pub duration_in_traffic_minutes: i64,
    pub traffic_level: TrafficLevel,
    pub traffic_delay_minutes: i64,
    pub mode: TravelMode,
    pub updated_at: DateTime<Utc>,
}

impl TravelEstimate {
    /// Derive the rounded and classified fields from raw distance matrix values.
    /// Halves round to even.
    pub fn from_measurements(
        distance_meters: i64,
        duration_seconds: i64,
        duration_in_traffic_seconds: i64,
        mode: TravelMode,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            distance_meters,
            distance_miles: (distance_meters as f64 * MILES_PER_METER * 10.0).round_ties_even()
                / 10.0,
            duration_seconds,
            duration_minutes: whole_minutes(duration_seconds),
            duration_in_traffic_seconds,
            duration_in_traffic_minutes: whole_minutes(duration_in_traffic_seconds),
            traffic_level: TrafficLevel::classify(duration_seconds, duration_in_traffic_seconds),
            traffic_delay_minutes: whole_minutes(duration_in_traffic_seconds - duration_seconds),
            mode,
            updated_at,
        }
    }

    /// Returned whenever the provider cannot be used. Always reports driving.
    pub fn fallback(updated_at: DateTime<Utc>) -> Self {
        Self {
            distance_meters: 15000,
            distance_miles: 9.3,
            duration_seconds: 1200,
            duration_minutes: 20,
            duration_in_traffic_seconds: 1500,
            duration_in_traffic_minutes: 25,
            traffic_level: TrafficLevel::Moderate,
            traffic_delay_minutes: 5,
            mode: TravelMode::Driving,
            updated_at,
        }
    }
}

fn whole_minutes(seconds: i64) -> i64 {
    (seconds as f64 / 60.0).round_ties_even() as i64
}

/// One origin's estimate in a multi-origin lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OriginEstimate {
    pub origin: Coordinates,
    #[serde(flatten)]
    pub estimate: TravelEstimate,
}
