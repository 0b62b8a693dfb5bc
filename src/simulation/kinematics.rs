//! Per-frame motion update
//!
//! Closed-form circular orbits: every position is recomputed from the
//! elapsed time, so nothing drifts no matter how many frames run. Rotation
//! is accumulated according to the engine's `RotationMode`.

use super::collision::PairEvent;
use super::engine::Engine;
use super::states::{Body, NVec3, SolarSystem, Spinner};

/// Place every body on its orbit at time `t` and advance its spin
/// Bodies are visited in order, so a moon always reads its parent's
/// position from this same frame
pub fn update_bodies(bodies: &mut [Body], t: f64, spin: f64) {
    for i in 0..bodies.len() {
        // parent index is lower than i, so it has already been moved this frame
        let centre = bodies[i]
            .parent
            .map(|p| bodies[p].transform.position)
            .unwrap_or_else(NVec3::zeros);

        let b = &mut bodies[i];
        b.transform.position = centre + b.orbit.offset_at(t);
        b.transform.rotation.y += b.rotation_speed * spin;
    }
}

/// Tumble the spinner about all three axes
pub fn update_spinner(spinner: &mut Spinner, spin: f64) {
    let step = spinner.speed * spin;
    spinner.transform.rotation += NVec3::new(step, step, step);
}

/// Advance the whole system to `elapsed` seconds since session start
/// Updates bodies, then the spinner, then the collision pair (in ms)
/// Returns the pair's transition for this frame, `PairEvent::None` without a pair
pub fn advance_frame(sys: &mut SolarSystem, engine: &Engine, elapsed: f64) -> PairEvent {
    // a clock that steps backwards produces a zero-length frame
    let dt = (elapsed - sys.t).max(0.0);
    let spin = engine.rotation.spin_factor(dt);

    update_bodies(&mut sys.bodies, elapsed, spin);

    if let Some(spinner) = sys.spinner.as_mut() {
        update_spinner(spinner, spin);
    }

    let event = match sys.pair.as_mut() {
        Some(pair) => pair.update(elapsed * 1000.0),
        None => PairEvent::None,
    };

    sys.t = elapsed;
    sys.frame += 1;
    event
}
