use sb_feeds::{Coordinates, TravelEstimate};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TrafficResponse {
    pub stadium_id: String,
    pub origin: Coordinates,
    #[serde(flatten)]
    pub estimate: TravelEstimate,
}
