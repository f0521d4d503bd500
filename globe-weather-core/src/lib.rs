//! Core library for the globe weather explorer.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The OpenWeather client behind a provider trait
//! - Application state, screen routing and display formatting
//! - A globe adapter that drives any rendering engine through a trait
//!
//! It is used by `globe-weather-cli`, but the engine and provider traits let
//! other front ends reuse it.

pub mod app;
pub mod config;
pub mod globe;
pub mod model;
pub mod provider;
pub mod router;
pub mod state;
pub mod view;

pub use app::App;
pub use config::Config;
pub use globe::{CameraState, GlobeAdapter, GlobeAppearance, GlobeEngine, PointOfView};
pub use model::{Coordinate, Marker, WeatherResult};
pub use provider::{LookupError, OpenWeatherProvider, WeatherProvider, provider_from_config};
pub use router::{Router, Screen};
pub use state::{AppState, SearchOutcome};
pub use view::{ResultView, SearchView};
