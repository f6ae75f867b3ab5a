pub mod cache;
pub mod openweather;
pub mod service;
pub mod types;

pub use cache::WeatherCache;
pub use openweather::OpenWeatherClient;
pub use service::WeatherService;
