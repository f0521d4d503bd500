//! Camera and marker control for the globe.
//!
//! The rendering itself belongs to whatever implements [`GlobeEngine`]; the
//! adapter only decides what the engine should be showing.

use std::time::Duration;

use tracing::info;

use crate::model::{Coordinate, Marker};

/// Altitude of the camera while idling, in globe radii.
pub const OVERVIEW_ALTITUDE: f64 = 2.5;
/// Altitude of the camera once it is centered on a result.
pub const FOCUS_ALTITUDE: f64 = 1.2;
pub const AUTO_ROTATE_SPEED: f64 = 0.5;
pub const FOCUS_TRANSITION: Duration = Duration::from_millis(2000);

/// Static look of the globe, applied once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeAppearance {
    pub background_color: &'static str,
    pub globe_image_url: &'static str,
    pub bump_image_url: &'static str,
    pub atmosphere_color: &'static str,
    pub atmosphere_altitude: f64,
}

impl Default for GlobeAppearance {
    fn default() -> Self {
        Self {
            background_color: "rgba(0,0,0,0)",
            globe_image_url: "//unpkg.com/three-globe/example/img/earth-night.jpg",
            bump_image_url: "//unpkg.com/three-globe/example/img/earth-topology.png",
            atmosphere_color: "#10b981",
            atmosphere_altitude: 0.15,
        }
    }
}

/// Camera directive. `target` is `None` when only the altitude changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfView {
    pub target: Option<Coordinate>,
    pub altitude: f64,
    pub transition: Duration,
}

/// The surface of a rendering engine the adapter drives.
pub trait GlobeEngine {
    fn set_appearance(&mut self, appearance: &GlobeAppearance);
    fn set_auto_rotate(&mut self, enabled: bool, speed: f64);
    fn point_of_view(&mut self, pov: PointOfView);
    /// Replaces the plotted points. Every point is drawn with a pulsing ring.
    fn set_points(&mut self, points: &[Marker]);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraState {
    Idle,
    Focused(PointOfView),
}

#[derive(Debug)]
pub struct GlobeAdapter<E: GlobeEngine> {
    engine: E,
    camera: CameraState,
}

impl<E: GlobeEngine> GlobeAdapter<E> {
    /// Applies the default appearance and starts idling.
    pub fn new(mut engine: E) -> Self {
        engine.set_appearance(&GlobeAppearance::default());
        engine.set_points(&[]);

        let mut adapter = Self {
            engine,
            camera: CameraState::Idle,
        };
        adapter.set_camera_idle();
        adapter
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn set_camera_idle(&mut self) {
        self.engine.set_auto_rotate(true, AUTO_ROTATE_SPEED);
        self.engine.point_of_view(PointOfView {
            target: None,
            altitude: OVERVIEW_ALTITUDE,
            transition: Duration::ZERO,
        });
        self.camera = CameraState::Idle;
    }

    /// Stops rotating, flies to `coordinate` and plots the single marker there.
    pub fn focus_on(&mut self, coordinate: Coordinate) {
        let pov = PointOfView {
            target: Some(coordinate),
            altitude: FOCUS_ALTITUDE,
            transition: FOCUS_TRANSITION,
        };

        self.engine.set_auto_rotate(false, AUTO_ROTATE_SPEED);
        self.engine.point_of_view(pov);
        self.engine.set_points(&[Marker::at(coordinate)]);
        self.camera = CameraState::Focused(pov);

        info!(lat = coordinate.lat, lon = coordinate.lon, "globe focused");
    }
}
