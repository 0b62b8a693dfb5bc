//! Core state types for the solar system.
//!
//! - `Transform` – position plus Euler rotation, written every frame
//! - `Orbit` / `Body` – circular orbit parameters and the body that follows them
//! - `Spinner` – decoration that tumbles about all three axes
//! - `SolarSystem` – owns every body, path, the collision pair and the clock
//!
//! Parameters are fixed once built; only transforms, the collision state and
//! the clock change from frame to frame.

use nalgebra::Vector3;

use super::collision::CollisionPair;
use super::orbit_path::PlacedPath;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: NVec3, // world position
    pub rotation: NVec3, // Euler angles (x, y, z) in radians, applied in XYZ order
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: NVec3::zeros(),
            rotation: NVec3::zeros(),
        }
    }
}

/// Circular orbit in the XZ plane around a parent (or the origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub radius: f64, // orbit radius
    pub angular_speed: f64, // rad/s
    pub height: f64, // fixed y offset
}

impl Orbit {
    /// Offset from the orbit centre at elapsed time `t` (seconds)
    pub fn offset_at(&self, t: f64) -> NVec3 {
        let angle = t * self.angular_speed;
        NVec3::new(
            self.radius * angle.cos(),
            self.height,
            self.radius * angle.sin(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub orbit: Orbit,
    pub rotation_speed: f64, // self rotation about Y
    pub parent: Option<usize>, // index of the body orbited, always lower than our own
    pub radius: f64, // visual radius
    pub color: String, // visual colour
    pub transform: Transform,
}

#[derive(Debug, Clone)]
pub struct Spinner {
    pub speed: f64, // rad per frame on each axis
    pub color: String,
    pub transform: Transform,
}

#[derive(Debug, Clone)]
pub struct SolarSystem {
    pub bodies: Vec<Body>, // parents before children
    pub paths: Vec<PlacedPath>, // decorative orbit paths
    pub pair: Option<CollisionPair>, // oscillating pair, if any
    pub spinner: Option<Spinner>,
    pub t: f64, // elapsed seconds at the last update
    pub frame: u64, // number of updates applied
}

impl SolarSystem {
    /// Look a body up by name
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Updated transforms of every body, in update order
    pub fn transforms(&self) -> impl Iterator<Item = (usize, &str, &Transform)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (i, b.name.as_str(), &b.transform))
    }

    /// Points of path `i` placed around the current position of the body it follows
    pub fn path_points(&self, i: usize) -> Option<Vec<NVec3>> {
        let placed = self.paths.get(i)?;
        let centre = placed
            .around
            .and_then(|b| self.bodies.get(b))
            .map(|b| b.transform.position)
            .unwrap_or_else(NVec3::zeros);
        Some(placed.path.points().iter().map(|p| p + centre).collect())
    }
}
