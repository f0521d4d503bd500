/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions for one city, as reported by the provider.
///
/// Values are stored exactly as received; rounding and unit conversion
/// happen in the views.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    pub city: String,
    pub country: String,
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub visibility_m: u32,
    pub pressure_hpa: u32,
    pub coordinate: Coordinate,
}

/// A point plotted on the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub size: f64,
}

impl Marker {
    pub const DEFAULT_SIZE: f64 = 20.0;

    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            lon: coordinate.lon,
            size: Self::DEFAULT_SIZE,
        }
    }
}
