//! Decorative circular orbit paths
//!
//! A path is a closed polyline of `segments + 1` points on a circle in the
//! XZ plane at y = 0. The last point repeats the first so the line strip
//! closes on itself.

use std::f64::consts::TAU;

use super::error::SimError;
use super::states::NVec3;

pub const DEFAULT_PATH_RADIUS: f64 = 4.0;
pub const DEFAULT_PATH_SEGMENTS: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    radius: f64,
    segments: usize,
    points: Vec<NVec3>,
}

impl OrbitPath {
    /// Sample a circle of `radius` with `segments` straight pieces
    pub fn new(radius: f64, segments: i64) -> Result<Self, SimError> {
        if segments < 1 {
            return Err(SimError::InvalidSegments { segments });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SimError::InvalidRadius { radius });
        }
        let segments = segments as usize;

        Ok(Self { radius, segments, points: sample_circle(radius, segments) })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Points relative to the path centre, first and last coincide
    pub fn points(&self) -> &[NVec3] {
        &self.points
    }
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            radius: DEFAULT_PATH_RADIUS,
            segments: DEFAULT_PATH_SEGMENTS,
            points: sample_circle(DEFAULT_PATH_RADIUS, DEFAULT_PATH_SEGMENTS),
        }
    }
}

// theta_i = 2*pi*i/segments for i in [0, segments]
fn sample_circle(radius: f64, segments: usize) -> Vec<NVec3> {
    (0..=segments)
        .map(|i| {
            let theta = i as f64 / segments as f64 * TAU;
            NVec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// An orbit path attached to the body it follows (None = world origin)
#[derive(Debug, Clone)]
pub struct PlacedPath {
    pub around: Option<usize>,
    pub color: String,
    pub path: OrbitPath,
}
