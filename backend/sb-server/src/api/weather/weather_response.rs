use sb_feeds::WeatherReport;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub stadium_id: String,
    /// Stadium city
    pub location: String,
    pub date: String,
    #[serde(flatten)]
    pub report: WeatherReport,
}
