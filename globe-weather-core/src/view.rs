//! What each screen shows, already formatted for display.

use std::fmt;

use crate::{model::WeatherResult, state::AppState};

pub const APP_TITLE: &str = "Know Your Weather";
pub const SEARCH_PLACEHOLDER: &str = "Enter city...";
pub const SEARCH_ACTION: &str = "Explore";
pub const NOT_FOUND_MESSAGE: &str = "City not found. The Earth is big, try again!";
pub const RETRY_ACTION: &str = "Try Again";
pub const CHANGE_CITY_ACTION: &str = "← Change City";

/// Rounds half up to a whole degree, the way the temperature is always shown.
pub fn format_degrees(celsius: f64) -> String {
    let rounded = (celsius + 0.5).floor();
    // -0.4 rounds to -0; show it as 0
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}°")
}

/// Meters to kilometers, rounded half up to one decimal.
pub fn format_visibility(meters: u32) -> String {
    let tenths = (f64::from(meters) / 100.0 + 0.5).floor();
    format!("{:.1} km", tenths / 10.0)
}

pub fn format_humidity(percent: u8) -> String {
    format!("{percent}%")
}

pub fn format_wind(speed_mps: f64) -> String {
    format!("{speed_mps} m/s")
}

pub fn format_pressure(hpa: u32) -> String {
    format!("{hpa} hPa")
}

/// Screen 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub action: &'static str,
    pub query: String,
}

impl SearchView {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            title: APP_TITLE,
            placeholder: SEARCH_PLACEHOLDER,
            action: SEARCH_ACTION,
            query: state.query().to_string(),
        }
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub heading: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub visibility: String,
    pub pressure: String,
    pub back_action: &'static str,
}

impl From<&WeatherResult> for WeatherCard {
    fn from(r: &WeatherResult) -> Self {
        Self {
            heading: format!("{}, {}", r.city, r.country),
            description: r.description.clone(),
            temperature: format_degrees(r.temperature_c),
            feels_like: format!("Feels like {}", format_degrees(r.feels_like_c)),
            humidity: format_humidity(r.humidity_pct),
            wind: format_wind(r.wind_speed_mps),
            visibility: format_visibility(r.visibility_m),
            pressure: format_pressure(r.pressure_hpa),
            back_action: CHANGE_CITY_ACTION,
        }
    }
}

impl fmt::Display for WeatherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "  {}   {}", self.temperature, self.feels_like)?;
        writeln!(f)?;
        writeln!(f, "  💧 Humidity    {}", self.humidity)?;
        writeln!(f, "  💨 Wind        {}", self.wind)?;
        writeln!(f, "  👁️  Visibility  {}", self.visibility)?;
        writeln!(f, "  ⏲️  Pressure    {}", self.pressure)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCard {
    pub message: &'static str,
    pub retry_action: &'static str,
}

impl Default for ErrorCard {
    fn default() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE,
            retry_action: RETRY_ACTION,
        }
    }
}

impl fmt::Display for ErrorCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)
    }
}

/// Screen 2.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Error(ErrorCard),
    Weather(WeatherCard),
    /// No search has completed yet.
    Empty,
}

impl ResultView {
    /// The error flag wins over any stale result.
    pub fn from_state(state: &AppState) -> Self {
        if state.has_error() {
            return ResultView::Error(ErrorCard::default());
        }

        match state.result() {
            Some(result) => ResultView::Weather(WeatherCard::from(result)),
            None => ResultView::Empty,
        }
    }

    /// Label of the single action that leads back to the search screen.
    pub fn back_action(&self) -> Option<&'static str> {
        match self {
            ResultView::Error(card) => Some(card.retry_action),
            ResultView::Weather(card) => Some(card.back_action),
            ResultView::Empty => None,
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultView::Error(card) => fmt::Display::fmt(card, f),
            ResultView::Weather(card) => fmt::Display::fmt(card, f),
            ResultView::Empty => Ok(()),
        }
    }
}
