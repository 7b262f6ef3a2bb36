use sb_core::Schedule;

use serde::Serialize;
use uuid::Uuid;

/// Schedule as listed for its owner. Timestamps are RFC 3339.
#[derive(Debug, Serialize)]
pub struct ScheduleDto {
    pub schedule_id: Uuid,
    pub schedule_name: String,
    pub match_ids: Vec<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Schedule> for ScheduleDto {
    fn from(schedule: Schedule) -> Self {
        Self {
            schedule_id: schedule.id,
            schedule_name: schedule.name,
            match_ids: schedule.match_ids,
            created_at: schedule.created_at.to_rfc3339(),
            updated_at: schedule.updated_at.to_rfc3339(),
        }
    }
}
