use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TrafficQuery {
    #[serde(default)]
    pub origin_lat: Option<f64>,
    #[serde(default)]
    pub origin_lon: Option<f64>,
    /// driving, walking, bicycling or transit; driving when absent
    #[serde(default)]
    pub mode: Option<String>,
}
