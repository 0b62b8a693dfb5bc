//! High-level runtime engine settings
//!
//! Selects how self rotation is accumulated and the fixed frame step used
//! when the simulation runs without a display

use crate::configuration::config::RotationConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationMode {
    PerFrame, // angle += speed every frame
    TimeScaled { reference_fps: f64 }, // angle += speed * dt * reference_fps
}

impl RotationMode {
    pub fn from_config(rotation: RotationConfig, reference_fps: f64) -> Self {
        match rotation {
            RotationConfig::PerFrame => RotationMode::PerFrame,
            RotationConfig::TimeScaled => RotationMode::TimeScaled { reference_fps },
        }
    }

    /// Multiplier applied to per-frame rotation speeds for a frame lasting `dt` seconds
    pub fn spin_factor(&self, dt: f64) -> f64 {
        match *self {
            RotationMode::PerFrame => 1.0,
            RotationMode::TimeScaled { reference_fps } => dt * reference_fps,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub rotation: RotationMode, // rotation accumulation policy
    pub frame_dt: f64, // seconds per frame when headless
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            rotation: RotationMode::PerFrame,
            frame_dt: 1.0 / 60.0,
        }
    }
}
