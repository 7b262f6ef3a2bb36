use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Light,
    Moderate,
    Heavy,
}

/// Estimated queue times, rendered as `"<n> minutes"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitTimes {
    pub security: String,
    pub concessions: String,
    pub restrooms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrowdForecast {
    pub stadium_id: String,
    pub match_id: Option<i64>,
    pub crowd_level: CrowdLevel,
    pub crowd_percentage: u32,
    pub peak_times: Vec<String>,
    pub recommended_arrival: String,
    pub parking_availability: String,
    pub estimated_wait_times: WaitTimes,
    pub updated_at: DateTime<Utc>,
}
