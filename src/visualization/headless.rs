//! Display-less driver: steps the scenario with a fixed frame time and
//! logs transforms instead of drawing them

use log::{debug, info};

use crate::simulation::collision::PairEvent;
use crate::simulation::scenario::Scenario;

/// Totals reported after a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSummary {
    pub frames: u64,
    pub elapsed: f64, // simulated seconds
    pub contacts: u64, // collision pair contacts seen
    pub releases: u64, // recoils that ran to completion
}

/// Step `frames` fixed frames, logging every body each `report_every` frames
pub fn run_headless(scenario: &mut Scenario, frames: u64, report_every: u64) -> HeadlessSummary {
    info!("run_headless: {} frames at dt = {:.4} s", frames, scenario.engine.frame_dt);

    let mut releases = 0;
    for _ in 0..frames {
        if scenario.step() == PairEvent::Released {
            releases += 1;
        }

        let sys = &scenario.system;
        if report_every > 0 && sys.frame % report_every == 0 {
            for (_, name, tf) in sys.transforms() {
                info!(
                    "t = {:7.3} {:>10}: pos ({:8.3}, {:6.3}, {:8.3}) rot_y {:7.3}",
                    sys.t, name, tf.position.x, tf.position.y, tf.position.z, tf.rotation.y
                );
            }
            if let Some(pair) = &sys.pair {
                debug!(
                    "t = {:7.3} pair: x = ({:.3}, {:.3}) phase {:?}",
                    sys.t, pair.bodies[0].position.x, pair.bodies[1].position.x, pair.state.phase
                );
            }
        }
    }

    let sys = &scenario.system;
    HeadlessSummary {
        frames: sys.frame,
        elapsed: sys.t,
        contacts: sys.pair.as_ref().map_or(0, |p| p.state.contacts),
        releases,
    }
}
