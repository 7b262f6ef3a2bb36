mod distance_matrix;
mod traffic_level;
mod traffic_service;
mod travel_estimate;
mod travel_mode;

pub use traffic_level::TrafficLevel;
pub use traffic_service::TrafficService;
pub use travel_estimate::{OriginEstimate, TravelEstimate};
pub use travel_mode::TravelMode;
