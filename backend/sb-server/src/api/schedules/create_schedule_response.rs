use sb_core::Schedule;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CreateScheduleResponse {
    pub schedule_id: Uuid,
    pub schedule_name: String,
    pub match_ids: Vec<i64>,
}

impl From<Schedule> for CreateScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            schedule_id: schedule.id,
            schedule_name: schedule.name,
            match_ids: schedule.match_ids,
        }
    }
}
