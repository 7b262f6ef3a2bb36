#![allow(dead_code)]

use sb_feeds::{Coordinates, TrafficService, WeatherService, build_http_client};

use std::time::Duration;

pub const WEATHER_KEY: &str = "weather-test-key";
pub const TRAFFIC_KEY: &str = "traffic-test-key";

pub fn metlife() -> Coordinates {
    Coordinates::new(40.8128, -74.0742)
}

pub fn manhattan() -> Coordinates {
    Coordinates::new(40.7128, -74.006)
}

pub fn weather_service(base_url: &str, api_key: Option<&str>) -> WeatherService {
    let client = build_http_client(Duration::from_secs(2)).expect("Failed to build client");
    WeatherService::new(client, api_key.map(String::from), base_url)
}

pub fn traffic_service(endpoint: &str, api_key: Option<&str>) -> TrafficService {
    let client = build_http_client(Duration::from_secs(2)).expect("Failed to build client");
    TrafficService::new(client, api_key.map(String::from), endpoint)
}
