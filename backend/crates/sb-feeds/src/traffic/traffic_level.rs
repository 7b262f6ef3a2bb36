use serde::Serialize;

const LIGHT_RATIO_LIMIT: f64 = 1.1;
const MODERATE_RATIO_LIMIT: f64 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Classify by how much longer the trip takes in traffic.
    /// A zero free-flow duration counts as no slowdown.
    pub fn classify(duration_secs: i64, duration_in_traffic_secs: i64) -> Self {
        let ratio = if duration_secs > 0 {
            duration_in_traffic_secs as f64 / duration_secs as f64
        } else {
            1.0
        };

        if ratio < LIGHT_RATIO_LIMIT {
            TrafficLevel::Light
        } else if ratio < MODERATE_RATIO_LIMIT {
            TrafficLevel::Moderate
        } else {
            TrafficLevel::Heavy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::Light => "light",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy => "heavy",
        }
    }
}
