use crate::ScheduleDto;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ScheduleListResponse {
    pub user_id: Uuid,
    pub schedules: Vec<ScheduleDto>,
}
