use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{config::Config, model::WeatherResult};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Why a lookup failed.
///
/// The variants exist for diagnostics only. Every one of them means the same
/// thing to the rest of the application: the city could not be looked up.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("weather request could not be sent: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider answered with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("weather response could not be parsed: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse(err.to_string())
    }
}

/// A source of current weather, one request per call.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, LookupError>;
}

/// Construct the OpenWeather provider using the configured API key.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key)))
}
