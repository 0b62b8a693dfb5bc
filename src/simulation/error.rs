//! Error types for scenario construction.
//!
//! The frame update itself cannot fail; every degenerate input is rejected
//! when the runtime scenario is built.

use std::fmt;

/// Errors raised while turning a configuration into a runnable scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Orbit path needs at least one segment.
    InvalidSegments { segments: i64 },
    /// Radius must be finite and non-negative.
    InvalidRadius { radius: f64 },
    /// Recoil duration must be positive and finite.
    InvalidRecoilDuration { duration_ms: f64 },
    /// Collision radius must be positive and finite.
    InvalidCollisionRadius { radius: f64 },
    /// Spinner speed outside the accepted range.
    SpeedOutOfRange { speed: f64, min: f64, max: f64 },
    /// Recoil force must be finite and non-negative.
    InvalidRecoilForce { force: f64 },
    /// Reference frame rate must be positive.
    InvalidFrameRate { fps: f64 },
    /// Headless frame step must be positive and finite.
    InvalidFrameStep { frame_dt: f64 },
    /// A numeric body parameter is NaN or infinite.
    NonFinite { body: String, field: &'static str },
    /// Two bodies share a name.
    DuplicateBody(String),
    /// A reference names a body that does not exist.
    UnknownBody(String),
    /// A moon is declared before the body it orbits.
    ParentOrder { body: String, parent: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidSegments { segments } => {
                write!(f, "orbit path needs at least 1 segment (got {})", segments)
            }
            SimError::InvalidRadius { radius } => {
                write!(f, "radius must be finite and non-negative (got {})", radius)
            }
            SimError::InvalidRecoilDuration { duration_ms } => {
                write!(f, "recoil duration must be positive (got {} ms)", duration_ms)
            }
            SimError::InvalidCollisionRadius { radius } => {
                write!(f, "collision radius must be positive (got {})", radius)
            }
            SimError::SpeedOutOfRange { speed, min, max } => {
                write!(f, "speed {} outside [{}, {}]", speed, min, max)
            }
            SimError::InvalidRecoilForce { force } => {
                write!(f, "recoil force must be finite and non-negative (got {})", force)
            }
            SimError::InvalidFrameStep { frame_dt } => {
                write!(f, "frame step must be positive (got {} s)", frame_dt)
            }
            SimError::InvalidFrameRate { fps } => {
                write!(f, "reference frame rate must be positive (got {})", fps)
            }
            SimError::NonFinite { body, field } => {
                write!(f, "body '{}' has a non-finite {}", body, field)
            }
            SimError::DuplicateBody(name) => write!(f, "body '{}' is declared twice", name),
            SimError::UnknownBody(name) => write!(f, "no body named '{}'", name),
            SimError::ParentOrder { body, parent } => {
                write!(f, "body '{}' must be declared after its parent '{}'", body, parent)
            }
        }
    }
}

impl std::error::Error for SimError {}
