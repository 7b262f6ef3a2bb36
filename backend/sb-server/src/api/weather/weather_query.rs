use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    /// `YYYY-MM-DD`; today when absent
    #[serde(default)]
    pub date: Option<String>,
}
