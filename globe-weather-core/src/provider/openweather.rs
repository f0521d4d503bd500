use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Coordinate, WeatherResult};

use super::{LookupError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Same as [`OpenWeatherProvider::new`], but talks to `base_url` instead
    /// of the public OpenWeather host.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    fn current_request(&self, city: &str) -> reqwest::Result<reqwest::Request> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        self.http
            .get(url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .build()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, LookupError> {
        let request = self.current_request(city)?;
        debug!(city, "requesting current weather from OpenWeather");

        let res = self.http.execute(request).await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    visibility: u32,
    coord: OwCoord,
}

impl TryFrom<OwCurrentResponse> for WeatherResult {
    type Error = LookupError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| LookupError::Parse("`weather` array is empty".to_string()))?;

        Ok(WeatherResult {
            city: parsed.name,
            country: parsed.sys.country,
            description,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            visibility_m: parsed.visibility,
            pressure_hpa: parsed.main.pressure,
            coordinate: Coordinate {
                lat: parsed.coord.lat,
                lon: parsed.coord.lon,
            },
        })
    }
}

fn parse_current(body: &str) -> Result<WeatherResult, LookupError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;
    WeatherResult::try_from(parsed)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
