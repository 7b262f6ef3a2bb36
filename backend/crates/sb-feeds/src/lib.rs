//! Best-effort weather, traffic and crowd data.
//!
//! Lookups never fail: any provider problem (no API key, timeout, HTTP
//! error, unexpected payload) is logged and answered with fixed fallback
//! data. `FeedError` only escapes from client construction.

mod coordinates;
pub mod crowds;
mod error;
mod http;
pub mod traffic;
pub mod weather;


pub use coordinates::Coordinates;
pub use crowds::{CrowdForecast, CrowdForecaster, CrowdLevel, WaitTimes};
pub use error::{FeedError, Result};
pub use http::build_http_client;
pub use traffic::{OriginEstimate, TrafficLevel, TrafficService, TravelEstimate, TravelMode};
pub use weather::{WeatherReport, WeatherService};
