use thiserror::Error;

/// Failure of a single informer request. None of these are retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider rejected the request: 403 for a bad key, 404 for an unknown location.
    #[error("Yandex.Weather rejected the request with status {status}")]
    Api { status: u16 },

    /// The request could not be sent or the response could not be read.
    #[error("Failed to reach Yandex.Weather: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not valid JSON or did not match the informers schema.
    #[error("Failed to parse Yandex.Weather response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl WeatherError {
    /// HTTP status of an [`WeatherError::Api`] rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherError::Api { status } => Some(*status),
            _ => None,
        }
    }
}
