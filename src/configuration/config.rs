//! Configuration types for loading solar system scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]    – global engine options (rotation policy, headless frame step)
//! - [`BodyConfig`]      – one entry per orbiting (or fixed) body
//! - [`OrbitPathConfig`] – decorative circular paths
//! - [`CollisionConfig`] – optional oscillating pair with recoil
//! - [`SpinnerConfig`]   – optional spinning decoration
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A short scenario matching these types:
//!
//! ```yaml
//! engine:
//!   rotation: "per_frame"   # or "time_scaled"
//!   reference_fps: 60.0
//!
//! bodies:
//!   - name: sun
//!     rotation_speed: 0.01
//!     radius: 1.5
//!   - name: earth
//!     orbit_radius: 10.0
//!     orbit_speed: 0.5
//!     radius: 0.4
//!   - name: moon
//!     parent: earth
//!     orbit_radius: 0.8
//!     orbit_speed: 3.0
//!     rotation_speed: 0.02
//!     radius: 0.15
//!
//! orbit_paths:
//!   - around: earth
//!     radius: 0.8
//! ```
//!
//! The engine then maps this configuration into its runtime representation
//! (see [`crate::simulation::scenario::Scenario`]), validating it on the way.

use serde::Deserialize;

/// How per-frame self rotation is accumulated
/// `rotation: "per_frame"` or `rotation: "time_scaled"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum RotationConfig {
    #[default]
    #[serde(rename = "per_frame")] // angle += speed on every frame, spin rate follows the display refresh rate
    PerFrame,

    #[serde(rename = "time_scaled")] // angle += speed * dt * reference_fps, same look at the reference rate on any display
    TimeScaled,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub rotation: RotationConfig, // rotation accumulation policy
    #[serde(default = "default_reference_fps")]
    pub reference_fps: f64, // frame rate at which time_scaled matches per_frame
    #[serde(default = "default_frame_dt")]
    pub frame_dt: f64, // fixed frame step in seconds for headless runs
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rotation: RotationConfig::default(),
            reference_fps: default_reference_fps(),
            frame_dt: default_frame_dt(),
        }
    }
}

/// Configuration for a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // unique name, also used to reference parents
    #[serde(default)]
    pub orbit_radius: f64, // distance from the parent (or origin); 0 keeps the body fixed
    #[serde(default)]
    pub orbit_speed: f64, // angular speed of the orbit in rad/s
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f64, // self rotation about Y per frame (rad)
    #[serde(default)]
    pub parent: Option<String>, // body this one orbits; None = origin
    #[serde(default)]
    pub height: f64, // fixed y offset from the parent plane
    #[serde(default = "default_body_radius")]
    pub radius: f64, // visual radius, rendering only
    #[serde(default = "default_color")]
    pub color: String, // rendering only
}

/// Decorative circular orbit path in the XZ plane
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitPathConfig {
    #[serde(default)]
    pub around: Option<String>, // body the path follows; None = origin
    #[serde(default = "default_path_radius")]
    pub radius: f64,
    #[serde(default = "default_segments")]
    pub segments: i64, // signed so that bad input reaches validation instead of failing to parse
    #[serde(default = "default_color")]
    pub color: String,
}

/// One body of the oscillating pair: x = offset + amplitude * sin(t_ms * speed)
#[derive(Deserialize, Debug, Clone)]
pub struct OscillatorConfig {
    pub name: String,
    pub offset: f64,
    pub amplitude: f64,
    pub speed: f64, // rad per millisecond
    #[serde(default = "default_color")]
    pub color: String,
}

/// Oscillating pair that recoils when the two spheres touch
#[derive(Deserialize, Debug, Clone)]
pub struct CollisionConfig {
    pub collision_radius: f64, // sphere radius; contact at 2 * collision_radius
    #[serde(default = "default_recoil_duration_ms")]
    pub recoil_duration_ms: f64,
    #[serde(default = "default_recoil_force")]
    pub recoil_force: f64, // instantaneous displacement applied to each body on contact
    pub bodies: [OscillatorConfig; 2],
}

/// Spinning decoration rotated about all three axes every frame
#[derive(Deserialize, Debug, Clone)]
pub struct SpinnerConfig {
    #[serde(default = "default_spinner_speed")]
    pub speed: f64, // rad per frame, valid range [0.001, 0.1]
    #[serde(default = "default_spinner_color")]
    pub color: String,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // engine-level configuration
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // bodies, parents before their moons
    #[serde(default)]
    pub orbit_paths: Vec<OrbitPathConfig>,
    #[serde(default)]
    pub collision: Option<CollisionConfig>,
    #[serde(default)]
    pub spinner: Option<SpinnerConfig>,
}

fn default_reference_fps() -> f64 { 60.0 }
fn default_frame_dt() -> f64 { 1.0 / 60.0 }
fn default_rotation_speed() -> f64 { 0.01 }
fn default_body_radius() -> f64 { 0.5 }
fn default_color() -> String { "white".to_string() }
fn default_path_radius() -> f64 { 4.0 }
fn default_segments() -> i64 { 64 }
fn default_recoil_duration_ms() -> f64 { 300.0 }
fn default_recoil_force() -> f64 { 0.5 }
fn default_spinner_speed() -> f64 { 0.01 }
fn default_spinner_color() -> String { "orange".to_string() }
