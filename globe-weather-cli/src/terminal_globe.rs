//! ASCII orthographic globe used as the rendering engine in the terminal.

use globe_weather_core::{Coordinate, GlobeAppearance, GlobeEngine, Marker, PointOfView};
use tracing::debug;

const ROWS: usize = 21;
const COLS: usize = 2 * ROWS + 1;
/// Radius in rows at the overview altitude.
const BASE_RADIUS: f64 = 9.0;
const BASE_ALTITUDE: f64 = 2.5;
/// Degrees between graticule lines.
const GRATICULE_STEP: i32 = 30;
/// Degrees of longitude the idle globe turns per frame, per unit of rotate speed.
const DEGREES_PER_FRAME: f64 = 20.0;

#[derive(Debug)]
pub struct TerminalGlobe {
    center: Coordinate,
    altitude: f64,
    auto_rotate: Option<f64>,
    points: Vec<Marker>,
    frame: u64,
}

impl Default for TerminalGlobe {
    fn default() -> Self {
        Self {
            center: Coordinate { lat: 0.0, lon: 0.0 },
            altitude: BASE_ALTITUDE,
            auto_rotate: None,
            points: Vec::new(),
            frame: 0,
        }
    }
}

impl TerminalGlobe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the next frame. An idle globe turns a little on every call and
    /// markers alternate between two glyphs to pulse.
    pub fn render(&mut self) -> String {
        if let Some(speed) = self.auto_rotate {
            self.center.lon = normalize_longitude(self.center.lon + speed * DEGREES_PER_FRAME);
        }
        self.frame += 1;

        let mut grid = vec![vec![' '; COLS]; ROWS];
        let radius = BASE_RADIUS * BASE_ALTITUDE / self.altitude;

        for step in 0..360 {
            let angle = f64::from(step).to_radians();
            let col = center_col() + angle.cos() * radius * 2.0;
            let row = center_row() - angle.sin() * radius;
            plot(&mut grid, row, col, 'o');
        }

        for line in (-90..=90).step_by(GRATICULE_STEP as usize) {
            for lon in (-180..180).step_by(2) {
                self.plot_geo(&mut grid, f64::from(line), f64::from(lon), radius, '.');
            }
        }
        for line in (-180..180).step_by(GRATICULE_STEP as usize) {
            for lat in (-90..=90).step_by(2) {
                self.plot_geo(&mut grid, f64::from(lat), f64::from(line), radius, '.');
            }
        }

        let glyph = if self.frame % 2 == 0 { '@' } else { '*' };
        for point in &self.points {
            self.plot_geo(&mut grid, point.lat, point.lon, radius, glyph);
        }

        let mut out = String::with_capacity(ROWS * (COLS + 1));
        for row in grid {
            out.extend(row.iter().collect::<String>().trim_end().chars());
            out.push('\n');
        }
        out
    }

    fn plot_geo(&self, grid: &mut [Vec<char>], lat: f64, lon: f64, radius: f64, glyph: char) {
        if let Some((x, y)) = project(self.center, lat, lon) {
            let col = center_col() + x * radius * 2.0;
            let row = center_row() - y * radius;
            plot(grid, row, col, glyph);
        }
    }
}

impl GlobeEngine for TerminalGlobe {
    fn set_appearance(&mut self, appearance: &GlobeAppearance) {
        // Textures and colors have no terminal equivalent.
        debug!(?appearance, "ignoring globe appearance");
    }

    fn set_auto_rotate(&mut self, enabled: bool, speed: f64) {
        self.auto_rotate = enabled.then_some(speed);
    }

    fn point_of_view(&mut self, pov: PointOfView) {
        if let Some(target) = pov.target {
            self.center = target;
        }
        self.altitude = pov.altitude.max(f64::EPSILON);
    }

    fn set_points(&mut self, points: &[Marker]) {
        self.points = points.to_vec();
    }
}

fn center_row() -> f64 {
    (ROWS / 2) as f64
}

fn center_col() -> f64 {
    (COLS / 2) as f64
}

/// Orthographic projection onto the unit disc, `None` on the far side.
fn project(center: Coordinate, lat: f64, lon: f64) -> Option<(f64, f64)> {
    let (lat0, lat) = (center.lat.to_radians(), lat.to_radians());
    let dlon = (lon - center.lon).to_radians();

    let cos_c = lat0.sin() * lat.sin() + lat0.cos() * lat.cos() * dlon.cos();
    if cos_c < 0.0 {
        return None;
    }

    let x = lat.cos() * dlon.sin();
    let y = lat0.cos() * lat.sin() - lat0.sin() * lat.cos() * dlon.cos();
    Some((x, y))
}

fn plot(grid: &mut [Vec<char>], row: f64, col: f64, glyph: char) {
    let (row, col) = (row.round(), col.round());
    if row < 0.0 || col < 0.0 {
        return;
    }

    if let Some(cell) = grid
        .get_mut(row as usize)
        .and_then(|r| r.get_mut(col as usize))
    {
        *cell = glyph;
    }
}

fn normalize_longitude(lon: f64) -> f64 {
    let normalized = (lon + 180.0).rem_euclid(360.0);
    normalized - 180.0
}
