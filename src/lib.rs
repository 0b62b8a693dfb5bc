pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Orbit, SolarSystem, Spinner, Transform, NVec3};
pub use simulation::orbit_path::{OrbitPath, PlacedPath};
pub use simulation::collision::{CollisionPair, CollisionPhase, CollisionState, Oscillator, PairEvent};
pub use simulation::ease::{ease_out_cubic, lerp};
pub use simulation::engine::{Engine, RotationMode};
pub use simulation::error::SimError;
pub use simulation::kinematics::{advance_frame, update_bodies};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, CollisionConfig, EngineConfig, OrbitPathConfig, OscillatorConfig, RotationConfig,
    ScenarioConfig, SpinnerConfig,
};

pub use configuration::logging::init_logging;

pub use visualization::{headless::run_headless, orrery_vis3d::run_3d};

pub use benchmark::benchmark::bench_frame_update;
