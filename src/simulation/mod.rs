pub mod states;
pub mod error;
pub mod engine;
pub mod ease;
pub mod orbit_path;
pub mod kinematics;
pub mod collision;
pub mod scenario;
