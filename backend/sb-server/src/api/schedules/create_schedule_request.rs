use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub schedule_name: String,

    /// Kept exactly as sent, duplicates and order included
    #[serde(default)]
    pub match_ids: Vec<i64>,
}
