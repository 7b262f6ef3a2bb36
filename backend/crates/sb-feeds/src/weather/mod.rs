mod openweather;
mod weather_report;
mod weather_service;

pub use weather_report::WeatherReport;
pub use weather_service::WeatherService;
