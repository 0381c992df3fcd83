use crate::model::WeatherReport;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// What can go wrong fetching weather. The CLI loop distinguishes
/// `CityNotFound` (user typo, specific message) from everything else
/// (generic connectivity message); both are recoverable.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("city '{city}' not found")]
    CityNotFound { city: String },

    #[error("request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError>;
}
