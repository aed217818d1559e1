//! Client library for the Yandex.Weather informers API.
//!
//! This crate defines:
//! - The response data model and lookups for its coded fields
//! - A single-call HTTP client behind the `WeatherProvider` trait
//! - Configuration & credentials handling for the `yaweather` binary
//!
//! ```no_run
//! # async fn run() -> Result<(), yaweather_core::WeatherError> {
//! let weather = yaweather_core::fetch("<api key>", 55.75, 37.62, "ru_RU").await?;
//! println!("{} °C, {}", weather.fact.temp, weather.fact.condition_text().unwrap_or("?"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod provider;

pub use config::{Config, Place};
pub use error::WeatherError;
pub use model::{Fact, Forecast, Info, Part, Weather, WeatherRequest};
pub use provider::{
    WeatherProvider,
    yandex::{YandexWeatherProvider, fetch},
};
