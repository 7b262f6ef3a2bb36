use crate::{CrowdForecast, CrowdLevel, WaitTimes};

use chrono::{DateTime, Timelike, Utc};

const PARKING_LIMITED_ABOVE: u32 = 60;
const SECURITY_DIVISOR: u32 = 10;
const CONCESSIONS_DIVISOR: u32 = 8;
const RESTROOMS_DIVISOR: u32 = 15;

const PEAK_TIMES: [&str; 2] = ["2 hours before kickoff", "30 minutes before kickoff"];
const RECOMMENDED_ARRIVAL: &str = "3 hours before kickoff";

/// Time-of-day crowd model. There is no live occupancy source, so the
/// forecast depends only on the UTC hour of `at`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrowdForecaster;

impl CrowdForecaster {
    pub fn new() -> Self {
        Self
    }

    pub fn forecast(
        &self,
        stadium_id: &str,
        match_id: Option<i64>,
        at: DateTime<Utc>,
    ) -> CrowdForecast {
        let (crowd_level, crowd_percentage) = Self::bucket(at.hour());

        let parking_availability = if crowd_percentage > PARKING_LIMITED_ABOVE {
            "limited"
        } else {
            "available"
        };

        CrowdForecast {
            stadium_id: stadium_id.to_string(),
            match_id,
            crowd_level,
            crowd_percentage,
            peak_times: PEAK_TIMES.iter().map(|s| s.to_string()).collect(),
            recommended_arrival: RECOMMENDED_ARRIVAL.to_string(),
            parking_availability: parking_availability.to_string(),
            estimated_wait_times: WaitTimes {
                security: minutes(crowd_percentage / SECURITY_DIVISOR),
                concessions: minutes(crowd_percentage / CONCESSIONS_DIVISOR),
                restrooms: minutes(crowd_percentage / RESTROOMS_DIVISOR),
            },
            updated_at: Utc::now(),
        }
    }

    fn bucket(hour: u32) -> (CrowdLevel, u32) {
        match hour {
            8..=11 => (CrowdLevel::Light, 25),
            12..=15 => (CrowdLevel::Moderate, 55),
            16..=19 => (CrowdLevel::Heavy, 85),
            _ => (CrowdLevel::Light, 15),
        }
    }
}

fn minutes(value: u32) -> String {
    format!("{} minutes", value)
}
