use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::{
    error::WeatherError,
    model::{Weather, WeatherRequest},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weather.yandex.ru/v2";
pub const API_KEY_HEADER: &str = "X-Yandex-API-Key";

/// Client for the informers endpoint.
///
/// Holds no per-request state; clones share the same connection pool.
#[derive(Clone)]
pub struct YandexWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl YandexWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at another host, e.g. a proxy or a mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET to `/informers`. 403 and 404 are reported as [`WeatherError::Api`];
    /// any other status goes on to decoding.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        lang: &str,
    ) -> Result<Weather, WeatherError> {
        let url = format!("{}/informers", self.base_url);

        let res = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("lang", lang.to_string()),
            ])
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        debug!(%status, "informers responded");

        if status == StatusCode::FORBIDDEN || status == StatusCode::NOT_FOUND {
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await.map_err(WeatherError::Transport)?;
        debug!(bytes = body.len(), "read informers body");

        serde_json::from_slice(&body).map_err(WeatherError::Decode)
    }
}

impl std::fmt::Debug for YandexWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YandexWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for YandexWeatherProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<Weather, WeatherError> {
        self.fetch(request.latitude, request.longitude, &request.lang).await
    }
}

/// Fetch with a throwaway client. Prefer keeping a [`YandexWeatherProvider`]
/// around when making several calls.
pub async fn fetch(
    api_key: &str,
    latitude: f64,
    longitude: f64,
    lang: &str,
) -> Result<Weather, WeatherError> {
    YandexWeatherProvider::new(api_key.to_owned()).fetch(latitude, longitude, lang).await
}
