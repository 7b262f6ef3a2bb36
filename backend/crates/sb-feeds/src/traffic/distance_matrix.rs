//! Google Distance Matrix response, reduced to the first element.

use serde::Deserialize;

const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
pub(crate) struct DistanceMatrixResponse {
    pub(crate) status: String,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    status: String,
    distance: Option<ValueField>,
    duration: Option<ValueField>,
    duration_in_traffic: Option<ValueField>,
}

#[derive(Debug, Deserialize)]
struct ValueField {
    value: i64,
}

/// `(distance_meters, duration_secs, duration_in_traffic_secs)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Measurements {
    pub(crate) distance_meters: i64,
    pub(crate) duration_secs: i64,
    pub(crate) duration_in_traffic_secs: i64,
}

impl DistanceMatrixResponse {
    /// Values of the first element, when both the response and the element are OK.
    /// Without traffic data the free-flow duration is used.
    pub(crate) fn first_measurements(&self) -> Option<Measurements> {
        if self.status != STATUS_OK {
            return None;
        }

        let element = self.rows.first()?.elements.first()?;
        if element.status != STATUS_OK {
            return None;
        }

        let duration_secs = element.duration.as_ref()?.value;
        Some(Measurements {
            distance_meters: element.distance.as_ref()?.value,
            duration_secs,
            duration_in_traffic_secs: element
                .duration_in_traffic
                .as_ref()
                .map_or(duration_secs, |d| d.value),
        })
    }
}
