use crate::{
    Config, Weather, WeatherRequest, error::WeatherError, provider::yandex::YandexWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod yandex;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<Weather, WeatherError>;
}

/// Construct a provider from the stored API key (and base URL override, if any).
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key.as_deref().ok_or_else(|| {
        anyhow::anyhow!(
            "No Yandex.Weather API key configured.\n\
             Hint: run `yaweather configure` or set YANDEX_WEATHER_API_KEY."
        )
    })?;

    let provider = match config.base_url.as_deref() {
        Some(url) => YandexWeatherProvider::with_base_url(api_key.to_owned(), url),
        None => YandexWeatherProvider::new(api_key.to_owned()),
    };

    Ok(Box::new(provider))
}
