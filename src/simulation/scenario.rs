//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - system state (`SolarSystem` with every body placed at t = 0)
//!
//! All validation happens here. A scenario that builds can always be
//! stepped; degenerate input is reported as a `SimError` instead.
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! viewer's per-frame system

use std::collections::HashMap;

use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::{BodyConfig, CollisionConfig, ScenarioConfig, SpinnerConfig};
use crate::simulation::collision::{CollisionPair, Oscillator, PairEvent};
use crate::simulation::engine::{Engine, RotationMode};
use crate::simulation::error::SimError;
use crate::simulation::kinematics::{advance_frame, update_bodies};
use crate::simulation::orbit_path::{OrbitPath, PlacedPath};
use crate::simulation::states::{Body, NVec3, Orbit, SolarSystem, Spinner, Transform};

pub const SPINNER_SPEED_MIN: f64 = 0.001;
pub const SPINNER_SPEED_MAX: f64 = 0.1;

/// Bevy resource holding a runnable scenario
///
/// In Bevy terms, this is inserted as a `Resource`; the viewer's update
/// system is its only writer
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub system: SolarSystem,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Engine (runtime) from EngineConfig
        let e_cfg = &cfg.engine;
        if !(e_cfg.reference_fps.is_finite() && e_cfg.reference_fps > 0.0) {
            return Err(SimError::InvalidFrameRate { fps: e_cfg.reference_fps });
        }
        if !(e_cfg.frame_dt.is_finite() && e_cfg.frame_dt > 0.0) {
            return Err(SimError::InvalidFrameStep { frame_dt: e_cfg.frame_dt });
        }
        let engine = Engine {
            rotation: RotationMode::from_config(e_cfg.rotation, e_cfg.reference_fps),
            frame_dt: e_cfg.frame_dt,
        };

        // Bodies: resolve parents to indices, parents must come first
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            if index.contains_key(bc.name.as_str()) {
                return Err(SimError::DuplicateBody(bc.name.clone()));
            }
            let parent = resolve_parent(bc, &index, &cfg.bodies)?;
            bodies.push(build_body(bc, parent)?);
            index.insert(bc.name.as_str(), i);
        }

        // oscillators share the body namespace so log lines stay unambiguous
        if let Some(cc) = &cfg.collision {
            let [a, b] = &cc.bodies;
            for name in [&a.name, &b.name] {
                if index.contains_key(name.as_str()) {
                    return Err(SimError::DuplicateBody(name.clone()));
                }
            }
            if a.name == b.name {
                return Err(SimError::DuplicateBody(b.name.clone()));
            }
        }

        // Orbit paths, optionally attached to a body
        let mut paths = Vec::with_capacity(cfg.orbit_paths.len());
        for pc in &cfg.orbit_paths {
            let around = match &pc.around {
                Some(name) => Some(
                    *index
                        .get(name.as_str())
                        .ok_or_else(|| SimError::UnknownBody(name.clone()))?,
                ),
                None => None,
            };
            paths.push(PlacedPath {
                around,
                color: pc.color.clone(),
                path: OrbitPath::new(pc.radius, pc.segments)?,
            });
        }

        let pair = cfg.collision.as_ref().map(build_pair).transpose()?;
        let spinner = cfg.spinner.as_ref().map(build_spinner).transpose()?;

        // Initial system state: everything placed at t = 0, no spin applied yet
        update_bodies(&mut bodies, 0.0, 0.0);
        let system = SolarSystem {
            bodies,
            paths,
            pair,
            spinner,
            t: 0.0,
            frame: 0,
        };

        info!(
            "scenario built: {} bodies, {} orbit paths, collision pair: {}, spinner: {}",
            system.bodies.len(),
            system.paths.len(),
            system.pair.is_some(),
            system.spinner.is_some(),
        );

        Ok(Self { engine, system })
    }

    /// Advance to `elapsed` seconds since the session started
    pub fn update(&mut self, elapsed: f64) -> PairEvent {
        advance_frame(&mut self.system, &self.engine, elapsed)
    }

    /// Advance by one fixed headless frame
    pub fn step(&mut self) -> PairEvent {
        let next = (self.system.frame + 1) as f64 * self.engine.frame_dt;
        self.update(next)
    }
}

fn resolve_parent(
    bc: &BodyConfig,
    index: &HashMap<&str, usize>,
    all: &[BodyConfig],
) -> Result<Option<usize>, SimError> {
    let Some(parent) = &bc.parent else {
        return Ok(None);
    };
    if let Some(&i) = index.get(parent.as_str()) {
        return Ok(Some(i));
    }
    // distinguish "declared later" from "does not exist"
    if all.iter().any(|b| &b.name == parent) {
        Err(SimError::ParentOrder { body: bc.name.clone(), parent: parent.clone() })
    } else {
        Err(SimError::UnknownBody(parent.clone()))
    }
}

fn build_body(bc: &BodyConfig, parent: Option<usize>) -> Result<Body, SimError> {
    let fields = [
        ("orbit_radius", bc.orbit_radius),
        ("orbit_speed", bc.orbit_speed),
        ("rotation_speed", bc.rotation_speed),
        ("height", bc.height),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(SimError::NonFinite { body: bc.name.clone(), field });
        }
    }
    if bc.orbit_radius < 0.0 {
        return Err(SimError::InvalidRadius { radius: bc.orbit_radius });
    }
    if !(bc.radius.is_finite() && bc.radius >= 0.0) {
        return Err(SimError::InvalidRadius { radius: bc.radius });
    }

    Ok(Body {
        name: bc.name.clone(),
        orbit: Orbit {
            radius: bc.orbit_radius,
            angular_speed: bc.orbit_speed,
            height: bc.height,
        },
        rotation_speed: bc.rotation_speed,
        parent,
        radius: bc.radius,
        color: bc.color.clone(),
        transform: Transform::default(),
    })
}

fn build_pair(cc: &CollisionConfig) -> Result<CollisionPair, SimError> {
    let [a, b] = &cc.bodies;
    let bodies = [
        Oscillator::new(a.name.clone(), a.offset, a.amplitude, a.speed).with_color(a.color.clone()),
        Oscillator::new(b.name.clone(), b.offset, b.amplitude, b.speed).with_color(b.color.clone()),
    ];
    CollisionPair::new(bodies, cc.collision_radius, cc.recoil_duration_ms, cc.recoil_force)
}

fn build_spinner(sc: &SpinnerConfig) -> Result<Spinner, SimError> {
    if !(SPINNER_SPEED_MIN..=SPINNER_SPEED_MAX).contains(&sc.speed) {
        return Err(SimError::SpeedOutOfRange {
            speed: sc.speed,
            min: SPINNER_SPEED_MIN,
            max: SPINNER_SPEED_MAX,
        });
    }
    Ok(Spinner {
        speed: sc.speed,
        color: sc.color.clone(),
        transform: Transform {
            position: NVec3::zeros(),
            // initial tilt about z
            rotation: NVec3::new(0.0, 0.0, 6.0_f64.cos()),
        },
    })
}
