use serde::{Deserialize, Serialize};

/// WGS84 point, serialized with the short `lat`/`lon` names
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `"lat,lon"`, the form the distance matrix expects
    pub(crate) fn as_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}
