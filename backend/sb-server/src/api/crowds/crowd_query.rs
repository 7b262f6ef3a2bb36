use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CrowdQuery {
    #[serde(default)]
    pub match_id: Option<i64>,
    /// RFC 3339 instant to forecast for; now when absent
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}
