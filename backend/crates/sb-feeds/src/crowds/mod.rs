mod crowd_forecast;
mod crowd_forecaster;

pub use crowd_forecast::{CrowdForecast, CrowdLevel, WaitTimes};
pub use crowd_forecaster::CrowdForecaster;
