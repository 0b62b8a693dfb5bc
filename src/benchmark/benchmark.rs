use std::time::Instant;

use crate::configuration::config::{BodyConfig, CollisionConfig, OscillatorConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::scenario::Scenario;

/// Time the full frame update for systems of growing size
/// Each planet gets two moons, plus the collision pair
pub fn bench_frame_update() -> Result<(), SimError> {
    let ns = [10, 100, 1000, 10000, 100000];
    let frames = 600; // ten seconds at 60 fps

    for n in ns {
        let mut scenario = Scenario::build_scenario(make_config(n))?;

        // Warm up
        scenario.step();

        let t0 = Instant::now();
        for _ in 0..frames {
            scenario.step();
        }
        let per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        println!(
            "planets = {:6}, bodies = {:6}, frame = {:10.3} us",
            n,
            scenario.system.bodies.len(),
            per_frame * 1e6
        );
    }
    Ok(())
}

/// Deterministic planet/moon layout of size `n`, no rand needed
fn make_config(n: usize) -> ScenarioConfig {
    let mut bodies = Vec::with_capacity(3 * n);

    for i in 0..n {
        let i_f = i as f64;
        let planet = format!("planet{i}");

        bodies.push(body(&planet, None, 2.0 + i_f * 0.5, 0.2 + (i_f * 0.37).sin().abs()));
        for m in 0..2 {
            let moon = format!("{planet}-moon{m}");
            bodies.push(body(&moon, Some(&planet), 0.8 + 0.3 * m as f64, 3.0 - 0.8 * m as f64));
        }
    }

    ScenarioConfig {
        bodies,
        collision: Some(CollisionConfig {
            collision_radius: 1.0,
            recoil_duration_ms: 300.0,
            recoil_force: 0.5,
            bodies: [
                oscillator("red", -3.0, 2.2),
                oscillator("blue", 3.0, -2.2),
            ],
        }),
        ..Default::default()
    }
}

fn body(name: &str, parent: Option<&str>, orbit_radius: f64, orbit_speed: f64) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        orbit_radius,
        orbit_speed,
        rotation_speed: 0.01,
        parent: parent.map(str::to_string),
        height: 0.0,
        radius: 0.2,
        color: "white".to_string(),
    }
}

fn oscillator(name: &str, offset: f64, amplitude: f64) -> OscillatorConfig {
    OscillatorConfig {
        name: name.to_string(),
        offset,
        amplitude,
        speed: 0.002,
        color: name.to_string(),
    }
}
