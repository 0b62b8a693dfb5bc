use std::f64::consts::PI;
use std::path::PathBuf;

use orrery::simulation::collision::{CollisionPair, Oscillator, PairEvent};
use orrery::simulation::states::NVec3;
use orrery::{run_headless, OrbitPath, Scenario, ScenarioConfig, SimError};

const EPS: f64 = 1e-9;

/// Build a scenario straight from YAML text
pub fn scenario_from(yaml: &str) -> Scenario {
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("test yaml must parse");
    Scenario::build_scenario(cfg).expect("test scenario must build")
}

/// Build, expecting a validation error
pub fn build_error(yaml: &str) -> SimError {
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("test yaml must parse");
    Scenario::build_scenario(cfg).expect_err("scenario should be rejected")
}

/// Earth at r = 10, w = 0.5 with one moon
pub fn earth_and_moon(rotation: &str) -> Scenario {
    scenario_from(&format!(
        "
engine:
  rotation: {rotation}
bodies:
  - name: earth
    orbit_radius: 10.0
    orbit_speed: 0.5
    rotation_speed: 0.01
  - name: moon
    parent: earth
    orbit_radius: 0.8
    orbit_speed: 3.0
    rotation_speed: 0.02
orbit_paths:
  - around: earth
    radius: 0.8
"
    ))
}

/// Two bodies at x = -2 and x = 2 closing in: distance = 4 - 3 sin(0.001 t_ms)
pub fn closing_pair() -> CollisionPair {
    CollisionPair::new(
        [
            Oscillator::new("left", -2.0, 1.5, 0.001),
            Oscillator::new("right", 2.0, -1.5, 0.001),
        ],
        1.0,
        300.0,
        0.5,
    )
    .unwrap()
}

const FRAME_MS: f64 = 1000.0 / 60.0;

// ==================================================================================
// Orbit path tests
// ==================================================================================

#[test]
fn orbit_path_is_closed_circle() {
    for radius in [0.5, 0.8, 4.0, 14.0] {
        for segments in [3, 4, 64, 129] {
            let path = OrbitPath::new(radius, segments).unwrap();
            let pts = path.points();

            assert_eq!(pts.len(), segments as usize + 1);
            assert!((pts[0] - pts[pts.len() - 1]).norm() < EPS, "path not closed");
            for p in pts {
                assert!((p.norm() - radius).abs() < EPS, "point off the circle: {:?}", p);
                assert_eq!(p.y, 0.0);
            }
        }
    }
}

#[test]
fn orbit_path_follows_its_body() {
    let mut sc = earth_and_moon("per_frame");
    sc.update(1.7);

    let earth = sc.system.body("earth").unwrap().transform.position;
    let pts = sc.system.path_points(0).unwrap();
    for p in &pts {
        assert!(((p - earth).norm() - 0.8).abs() < EPS);
    }
    assert!(sc.system.path_points(1).is_none());
}

// ==================================================================================
// Orbital motion tests
// ==================================================================================

#[test]
fn orbit_stays_on_circle() {
    let mut sc = earth_and_moon("per_frame");
    for i in 0..500 {
        let t = i as f64 * 0.137;
        sc.update(t);
        let p = sc.system.body("earth").unwrap().transform.position;
        assert!((p.x * p.x + p.z * p.z - 100.0).abs() < 1e-9, "t = {t}: {:?}", p);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn earth_end_to_end_positions() {
    let mut sc = earth_and_moon("per_frame");

    sc.update(0.0);
    let p = sc.system.body("earth").unwrap().transform.position;
    assert!((p - NVec3::new(10.0, 0.0, 0.0)).norm() < EPS);

    sc.update(PI);
    let p = sc.system.body("earth").unwrap().transform.position;
    assert!((p - NVec3::new(0.0, 0.0, 10.0)).norm() < 1e-9, "got {:?}", p);
}

#[test]
fn moon_is_parent_plus_own_offset() {
    let mut sc = earth_and_moon("per_frame");
    for i in 0..300 {
        let t = i as f64 * 0.05;
        sc.update(t);

        let earth = sc.system.body("earth").unwrap().transform.position;
        let moon = sc.system.body("moon").unwrap().transform.position;
        let expected = NVec3::new(0.8 * (3.0 * t).cos(), 0.0, 0.8 * (3.0 * t).sin());

        // uses this frame's earth position, not the previous one
        assert!((moon - earth - expected).norm() < EPS, "t = {t}");
    }
}

#[test]
fn bodies_start_on_their_orbits() {
    let sc = earth_and_moon("per_frame");
    let moon = sc.system.body("moon").unwrap().transform.position;
    assert!((moon - NVec3::new(10.8, 0.0, 0.0)).norm() < EPS);
    assert_eq!(sc.system.frame, 0);
}

// ==================================================================================
// Rotation tests
// ==================================================================================

#[test]
fn per_frame_rotation_ignores_frame_time() {
    let mut sc = earth_and_moon("per_frame");
    // uneven frame times, 10 frames
    for t in [0.01, 0.02, 0.5, 0.51, 0.9, 1.0, 3.0, 3.001, 3.002, 4.0] {
        sc.update(t);
    }
    let earth = sc.system.body("earth").unwrap();
    let moon = sc.system.body("moon").unwrap();
    assert!((earth.transform.rotation.y - 0.1).abs() < EPS);
    assert!((moon.transform.rotation.y - 0.2).abs() < EPS);
}

#[test]
fn time_scaled_rotation_tracks_elapsed_time() {
    let mut sc = earth_and_moon("time_scaled");
    // 30 fps for one second: same spin as 60 frames at the reference rate
    for i in 1..=30 {
        sc.update(i as f64 / 30.0);
    }
    let earth = sc.system.body("earth").unwrap();
    assert!((earth.transform.rotation.y - 0.6).abs() < 1e-9, "got {}", earth.transform.rotation.y);
}

#[test]
fn backwards_clock_adds_no_time_scaled_spin() {
    let mut sc = earth_and_moon("time_scaled");
    sc.update(1.0);
    let before = sc.system.body("earth").unwrap().transform.rotation.y;
    sc.update(0.5);
    let after = sc.system.body("earth").unwrap().transform.rotation.y;
    assert_eq!(before, after);
}

#[test]
fn spinner_tumbles_on_all_axes() {
    let mut sc = scenario_from("spinner: { speed: 0.02 }");
    let start = sc.system.spinner.as_ref().unwrap().transform.rotation;
    assert!((start.z - 6.0_f64.cos()).abs() < EPS);

    for i in 1..=5 {
        sc.update(i as f64 / 60.0);
    }
    let r = sc.system.spinner.as_ref().unwrap().transform.rotation;
    assert!((r.x - 0.1).abs() < EPS);
    assert!((r.y - 0.1).abs() < EPS);
    assert!((r.z - start.z - 0.1).abs() < EPS);
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn pair_starts_free_at_offsets() {
    let pair = closing_pair();
    assert!(!pair.is_colliding());
    assert_eq!(pair.bodies[0].position.x, -2.0);
    assert_eq!(pair.bodies[1].position.x, 2.0);
}

#[test]
fn contact_happens_once_then_releases_after_recoil_duration() {
    let mut pair = closing_pair();
    let mut contact_at = None;
    let mut release_at = None;
    let mut contacts = 0;

    for k in 0..120 {
        let now = k as f64 * FRAME_MS;
        let nominal_gap = (pair.bodies[1].nominal(now) - pair.bodies[0].nominal(now)).norm();

        match pair.update(now) {
            PairEvent::Contact => {
                contacts += 1;
                if contact_at.is_none() {
                    assert!(nominal_gap < 2.0);
                    // the previous frame was still out of range
                    let prev = now - FRAME_MS;
                    let prev_gap = (pair.bodies[1].nominal(prev) - pair.bodies[0].nominal(prev)).norm();
                    assert!(prev_gap >= 2.0);
                    contact_at = Some(now);
                }
            }
            PairEvent::Released => {
                release_at = Some(now);
                break;
            }
            PairEvent::None => {
                if contact_at.is_some() {
                    assert!(pair.is_colliding(), "left recoil without a release event");
                }
            }
        }
    }

    let contact_at = contact_at.expect("bodies never touched");
    let release_at = release_at.expect("recoil never ended");
    assert_eq!(contacts, 1, "re-entered recoil while the timer was running");

    let recoil = release_at - contact_at;
    assert!(recoil > 300.0 && recoil <= 300.0 + FRAME_MS + 1e-6, "recoil lasted {recoil} ms");
    assert!(!pair.is_colliding());
}

#[test]
fn recoil_push_is_antisymmetric() {
    let mut pair = closing_pair();
    let mut now = 0.0;
    while pair.update(now) != PairEvent::Contact {
        now += FRAME_MS;
        assert!(now < 5000.0, "bodies never touched");
    }

    let d0 = pair.bodies[0].position - pair.bodies[0].nominal(now);
    let d1 = pair.bodies[1].position - pair.bodies[1].nominal(now);

    assert!((d0 + d1).norm() < EPS);
    assert!((d0.norm() - 0.5).abs() < EPS);
    // left body is pushed further left
    assert!(d0.x < 0.0 && d1.x > 0.0);
    assert_eq!(pair.state.recoil_start_ms, now);
}

#[test]
fn recoil_returns_smoothly_to_the_curve() {
    let mut pair = closing_pair();
    let mut now = 0.0;
    while pair.update(now) != PairEvent::Contact {
        now += FRAME_MS;
    }

    let mut last = pair.bodies[0].position;
    let mut gap = f64::INFINITY;
    loop {
        now += FRAME_MS;
        if pair.update(now) == PairEvent::Released {
            break;
        }
        let p = pair.bodies[0].position;
        // no snapping: every frame moves less than the recoil push itself
        assert!((p - last).norm() < 0.5, "jump of {} at {now} ms", (p - last).norm());
        last = p;
        gap = (p - pair.bodies[0].nominal(now)).norm();
    }

    // just before release the body is already back on its curve
    assert!(gap < 1e-2, "still {gap} away from the curve");
    assert!((pair.bodies[0].position - pair.bodies[0].nominal(now)).norm() < EPS);
}

#[test]
fn collision_scenario_keeps_colliding_over_time() {
    let mut sc = scenario_from(
        "
collision:
  collision_radius: 1.0
  bodies:
    - { name: red, offset: -3.0, amplitude: 2.2, speed: 0.002 }
    - { name: blue, offset: 3.0, amplitude: -2.2, speed: 0.002 }
",
    );
    // one full oscillation is pi seconds
    let summary = run_headless(&mut sc, 60 * 4, 0);
    assert_eq!(summary.frames, 240);
    assert!((summary.elapsed - 4.0).abs() < 1e-9);
    assert!(summary.contacts >= 1);
    assert!(summary.releases >= 1);
}

#[test]
fn scenario_update_reports_pair_transitions() {
    let mut sc = scenario_from(
        "
collision:
  collision_radius: 1.0
  bodies:
    - { name: left, offset: -2.0, amplitude: 1.5, speed: 0.001 }
    - { name: right, offset: 2.0, amplitude: -1.5, speed: 0.001 }
",
    );
    let mut events = Vec::new();
    for k in 1..=120 {
        match sc.update(k as f64 / 60.0) {
            PairEvent::None => {}
            e => events.push(e),
        }
    }
    assert_eq!(events.first(), Some(&PairEvent::Contact));
    assert_eq!(events.get(1), Some(&PairEvent::Released));
    assert_eq!(sc.system.pair.as_ref().unwrap().state.contacts as usize,
        events.iter().filter(|e| **e == PairEvent::Contact).count());
}

#[test]
fn update_without_pair_reports_nothing() {
    let mut sc = earth_and_moon("per_frame");
    for k in 1..=10 {
        assert_eq!(sc.update(k as f64 / 60.0), PairEvent::None);
    }
}

// ==================================================================================
// Validation tests
// ==================================================================================

#[test]
fn rejects_degenerate_orbit_path() {
    let err = build_error("orbit_paths: [ { segments: 0 } ]");
    assert_eq!(err, SimError::InvalidSegments { segments: 0 });
}

#[test]
fn rejects_zero_recoil_duration() {
    let err = build_error(
        "
collision:
  collision_radius: 1.0
  recoil_duration_ms: 0.0
  bodies:
    - { name: a, offset: -2.0, amplitude: 1.0, speed: 0.001 }
    - { name: b, offset: 2.0, amplitude: -1.0, speed: 0.001 }
",
    );
    assert_eq!(err, SimError::InvalidRecoilDuration { duration_ms: 0.0 });
}

#[test]
fn rejects_negative_recoil_force() {
    let err = build_error(
        "
collision:
  collision_radius: 1.0
  recoil_force: -3.0
  bodies:
    - { name: a, offset: -0.5, amplitude: 0.0, speed: 0.0 }
    - { name: b, offset: 0.5, amplitude: 0.0, speed: 0.0 }
",
    );
    assert_eq!(err, SimError::InvalidRecoilForce { force: -3.0 });
}

#[test]
fn rejects_bad_frame_step_by_name() {
    let err = build_error("engine: { frame_dt: 0.0 }");
    assert_eq!(err, SimError::InvalidFrameStep { frame_dt: 0.0 });
    assert!(err.to_string().contains("frame step"));

    let err = build_error("engine: { reference_fps: -1.0 }");
    assert_eq!(err, SimError::InvalidFrameRate { fps: -1.0 });
}

#[test]
fn rejects_negative_orbit_radius() {
    assert_eq!(
        build_error("bodies: [ { name: a, orbit_radius: -1.0 } ]"),
        SimError::InvalidRadius { radius: -1.0 }
    );
}

#[test]
fn rejects_non_finite_body_fields() {
    assert_eq!(
        build_error("bodies: [ { name: a, orbit_speed: .inf } ]"),
        SimError::NonFinite { body: "a".into(), field: "orbit_speed" }
    );
    assert_eq!(
        build_error("bodies: [ { name: a, height: .nan } ]"),
        SimError::NonFinite { body: "a".into(), field: "height" }
    );
}

#[test]
fn duplicate_name_wins_over_bad_numbers() {
    assert_eq!(
        build_error("bodies: [ { name: a }, { name: a, orbit_radius: .nan } ]"),
        SimError::DuplicateBody("a".into())
    );
}

#[test]
fn oscillator_names_must_be_unique() {
    // clashes with a body
    let err = build_error(
        "
bodies: [ { name: red } ]
collision:
  collision_radius: 1.0
  bodies:
    - { name: red, offset: -3.0, amplitude: 2.2, speed: 0.002 }
    - { name: blue, offset: 3.0, amplitude: -2.2, speed: 0.002 }
",
    );
    assert_eq!(err, SimError::DuplicateBody("red".into()));

    // clashes with the other oscillator
    let err = build_error(
        "
collision:
  collision_radius: 1.0
  bodies:
    - { name: twin, offset: -3.0, amplitude: 2.2, speed: 0.002 }
    - { name: twin, offset: 3.0, amplitude: -2.2, speed: 0.002 }
",
    );
    assert_eq!(err, SimError::DuplicateBody("twin".into()));
}

#[test]
fn rejects_bad_body_references() {
    assert_eq!(
        build_error("bodies: [ { name: a }, { name: a } ]"),
        SimError::DuplicateBody("a".into())
    );
    assert_eq!(
        build_error("bodies: [ { name: moon, parent: nowhere } ]"),
        SimError::UnknownBody("nowhere".into())
    );
    assert_eq!(
        build_error("bodies: [ { name: moon, parent: earth }, { name: earth } ]"),
        SimError::ParentOrder { body: "moon".into(), parent: "earth".into() }
    );
    assert_eq!(
        build_error("orbit_paths: [ { around: pluto } ]"),
        SimError::UnknownBody("pluto".into())
    );
}

#[test]
fn rejects_spinner_speed_out_of_range() {
    assert!(matches!(
        build_error("spinner: { speed: 0.5 }"),
        SimError::SpeedOutOfRange { .. }
    ));
    assert!(matches!(
        build_error("spinner: { speed: 0.0 }"),
        SimError::SpeedOutOfRange { .. }
    ));
}

#[test]
fn shipped_scenarios_build() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["solar_system.yaml", "collision.yaml", "spinner.yaml"] {
        let text = std::fs::read_to_string(dir.join(name)).unwrap();
        let cfg: ScenarioConfig = serde_yaml::from_str(&text).unwrap();
        assert!(Scenario::build_scenario(cfg).is_ok(), "{name} failed to build");
    }
}
