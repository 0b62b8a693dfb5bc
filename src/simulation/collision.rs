//! Oscillating pair with contact detection and spring-back recoil
//!
//! Two spheres slide along X on independent sine curves. When their centres
//! come closer than `2 * collision_radius` they are pushed apart along the
//! line joining them, then eased back onto their sine curves over
//! `recoil_duration_ms`.
//!
//! States: `Free` -> `Recoiling` on contact, `Recoiling` -> `Free` once the
//! recoil duration has passed. Contact while already recoiling is ignored and
//! does not restart the timer.

use log::{debug, info};

use super::ease::{ease_out_cubic, lerp};
use super::error::SimError;
use super::states::NVec3;

/// One body of the pair: x = offset + amplitude * sin(now_ms * speed)
#[derive(Debug, Clone)]
pub struct Oscillator {
    pub name: String,
    pub offset: f64, // centre of the oscillation on X
    pub amplitude: f64, // signed, so the two bodies can move toward each other
    pub speed: f64, // rad per millisecond
    pub color: String,
    pub position: NVec3, // current position, may be off the nominal curve while recoiling
}

impl Oscillator {
    pub fn new(name: impl Into<String>, offset: f64, amplitude: f64, speed: f64) -> Self {
        let mut osc = Self {
            name: name.into(),
            offset,
            amplitude,
            speed,
            color: "white".to_string(),
            position: NVec3::zeros(),
        };
        osc.position = osc.nominal(0.0);
        osc
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Position on the oscillation curve at `now_ms`
    pub fn nominal(&self, now_ms: f64) -> NVec3 {
        NVec3::new(self.offset + self.amplitude * (now_ms * self.speed).sin(), 0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPhase {
    Free,
    Recoiling,
}

/// What changed during one pair update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairEvent {
    None,
    Contact, // Free -> Recoiling
    Released, // Recoiling -> Free
}

#[derive(Debug, Clone)]
pub struct CollisionState {
    pub phase: CollisionPhase,
    pub recoil_start_ms: f64, // time of the last Free -> Recoiling transition
    pub recoil_duration_ms: f64,
    pub recoil_force: f64, // displacement applied to each body at contact
    pub contacts: u64, // number of Free -> Recoiling transitions so far
}

impl CollisionState {
    pub fn is_colliding(&self) -> bool {
        self.phase == CollisionPhase::Recoiling
    }
}

#[derive(Debug, Clone)]
pub struct CollisionPair {
    pub bodies: [Oscillator; 2],
    pub collision_radius: f64,
    pub state: CollisionState,
}

impl CollisionPair {
    pub fn new(
        bodies: [Oscillator; 2],
        collision_radius: f64,
        recoil_duration_ms: f64,
        recoil_force: f64,
    ) -> Result<Self, SimError> {
        if !(collision_radius.is_finite() && collision_radius > 0.0) {
            return Err(SimError::InvalidCollisionRadius { radius: collision_radius });
        }
        if !(recoil_duration_ms.is_finite() && recoil_duration_ms > 0.0) {
            return Err(SimError::InvalidRecoilDuration { duration_ms: recoil_duration_ms });
        }
        // a negative push would swap the bodies instead of separating them
        if !(recoil_force.is_finite() && recoil_force >= 0.0) {
            return Err(SimError::InvalidRecoilForce { force: recoil_force });
        }
        for b in &bodies {
            if !(b.offset.is_finite() && b.amplitude.is_finite() && b.speed.is_finite()) {
                return Err(SimError::NonFinite { body: b.name.clone(), field: "oscillation" });
            }
        }

        Ok(Self {
            bodies,
            collision_radius,
            state: CollisionState {
                phase: CollisionPhase::Free,
                recoil_start_ms: 0.0,
                recoil_duration_ms,
                recoil_force,
                contacts: 0,
            },
        })
    }

    /// Distance between the two centres
    pub fn distance(&self) -> f64 {
        (self.bodies[1].position - self.bodies[0].position).norm()
    }

    pub fn is_colliding(&self) -> bool {
        self.state.is_colliding()
    }

    /// Advance the pair to `now_ms` (milliseconds since session start)
    pub fn update(&mut self, now_ms: f64) -> PairEvent {
        match self.state.phase {
            CollisionPhase::Free => {
                for b in self.bodies.iter_mut() {
                    b.position = b.nominal(now_ms);
                }

                if self.distance() < 2.0 * self.collision_radius {
                    self.begin_recoil(now_ms);
                    return PairEvent::Contact;
                }
                PairEvent::None
            }
            CollisionPhase::Recoiling => {
                let since = now_ms - self.state.recoil_start_ms;

                if since > self.state.recoil_duration_ms {
                    // back on the curve; contact is tested again from the next frame
                    for b in self.bodies.iter_mut() {
                        b.position = b.nominal(now_ms);
                    }
                    self.state.phase = CollisionPhase::Free;
                    debug!("{} / {}: recoil finished at {:.0} ms", self.bodies[0].name, self.bodies[1].name, now_ms);
                    return PairEvent::Released;
                }

                let k = ease_out_cubic(since / self.state.recoil_duration_ms);
                for b in self.bodies.iter_mut() {
                    let nominal = b.nominal(now_ms);
                    b.position = lerp(&b.position, &nominal, k);
                }
                PairEvent::None
            }
        }
    }

    // Push both bodies apart along the line joining them and arm the timer
    fn begin_recoil(&mut self, now_ms: f64) {
        let delta = self.bodies[1].position - self.bodies[0].position;
        let len = delta.norm();
        // coincident centres have no direction, fall back to +X
        let dir = if len > f64::EPSILON { delta / len } else { NVec3::x() };
        let push = dir * self.state.recoil_force;

        self.bodies[0].position -= push;
        self.bodies[1].position += push;

        self.state.phase = CollisionPhase::Recoiling;
        self.state.recoil_start_ms = now_ms;
        self.state.contacts += 1;

        info!(
            "{} / {}: contact #{} at {:.0} ms (distance {:.3})",
            self.bodies[0].name, self.bodies[1].name, self.state.contacts, now_ms, len
        );
    }
}
