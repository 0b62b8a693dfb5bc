use bevy::color::palettes::css;
use bevy::log::LogPlugin;
use bevy::math::primitives::{Sphere, Torus};
use bevy::prelude::*;
use log::{info, warn};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the two spheres of the collision pair
#[derive(Component)]
struct OscillatorIndex(pub usize);

#[derive(Component)]
struct SpinnerTag;

const CAMERA_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
const CAMERA_FOV_DEG: f32 = 50.0;

/// Starts the Bevy viewer; returns when the window closes
/// Expects the process logger to be installed already (see `init_logging`)
pub fn run_3d(scenario: Scenario) {
    info!(
        "run_3d: starting Bevy 3D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "orrery".into(),
                        ..default()
                    }),
                    ..default()
                })
                // env_logger is already installed
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (step_simulation, sync_transforms, draw_orbit_paths).chain())
        .run();
}

/// Startup system: camera, lights, and one mesh per simulated object
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    commands.spawn(Camera3dBundle {
        projection: PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            ..default()
        }
        .into(),
        transform: Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 4000.0,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    let system = &scenario.system;

    // the sun sits at the origin and lights everything around it
    if !system.bodies.is_empty() {
        commands.spawn(PointLightBundle {
            point_light: PointLight {
                intensity: 2_000_000.0,
                range: 100.0,
                // the light sits inside the sun mesh
                shadows_enabled: false,
                ..default()
            },
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..default()
        });
    }

    for (i, b) in system.bodies.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(b.radius as f32).mesh().uv(32, 18)),
                material: materials.add(StandardMaterial {
                    base_color: parse_color(&b.color),
                    ..default()
                }),
                transform: Transform::from_translation(to_vec3(&b.transform.position)),
                ..default()
            },
            BodyIndex(i),
        ));
    }

    if let Some(pair) = &system.pair {
        for (i, osc) in pair.bodies.iter().enumerate() {
            commands.spawn((
                PbrBundle {
                    mesh: meshes.add(Sphere::new(pair.collision_radius as f32).mesh().uv(32, 18)),
                    material: materials.add(StandardMaterial {
                        base_color: parse_color(&osc.color),
                        ..default()
                    }),
                    transform: Transform::from_translation(to_vec3(&osc.position)),
                    ..default()
                },
                OscillatorIndex(i),
            ));
        }
    }

    if let Some(spinner) = &system.spinner {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Torus {
                    minor_radius: 0.4,
                    major_radius: 2.0,
                }),
                material: materials.add(StandardMaterial {
                    base_color: parse_color(&spinner.color),
                    perceptual_roughness: 1.0,
                    ..default()
                }),
                transform: Transform::from_rotation(to_quat(&spinner.transform.rotation)),
                ..default()
            },
            SpinnerTag,
        ));
    }
}

/// Per-frame kinematics update driven by the app clock
fn step_simulation(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    // contact and release are logged by the pair itself
    scenario.update(time.elapsed_seconds_f64());
}

/// Copy simulated transforms onto the rendered entities
fn sync_transforms(
    scenario: Res<Scenario>,
    mut bodies: Query<(&BodyIndex, &mut Transform), (Without<OscillatorIndex>, Without<SpinnerTag>)>,
    mut oscillators: Query<(&OscillatorIndex, &mut Transform), (Without<BodyIndex>, Without<SpinnerTag>)>,
    mut spinners: Query<&mut Transform, (With<SpinnerTag>, Without<BodyIndex>, Without<OscillatorIndex>)>,
) {
    let system = &scenario.system;

    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = system.bodies.get(*i) {
            transform.translation = to_vec3(&b.transform.position);
            transform.rotation = to_quat(&b.transform.rotation);
        }
    }

    if let Some(pair) = &system.pair {
        for (OscillatorIndex(i), mut transform) in &mut oscillators {
            if let Some(osc) = pair.bodies.get(*i) {
                transform.translation = to_vec3(&osc.position);
            }
        }
    }

    if let Some(spinner) = &system.spinner {
        for mut transform in &mut spinners {
            transform.rotation = to_quat(&spinner.transform.rotation);
        }
    }
}

/// Orbit paths are redrawn every frame around the current position of their body
fn draw_orbit_paths(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let system = &scenario.system;
    for (i, placed) in system.paths.iter().enumerate() {
        if let Some(points) = system.path_points(i) {
            gizmos.linestrip(points.iter().map(to_vec3), parse_color(&placed.color));
        }
    }
}

fn to_vec3(v: &NVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

fn to_quat(euler: &NVec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x as f32, euler.y as f32, euler.z as f32)
}

/// Named CSS colours used by the shipped scenarios, or `#rrggbb`
fn parse_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "white" => Color::WHITE,
        "black" => Color::BLACK,
        "orange" => css::ORANGE.into(),
        "red" => css::RED.into(),
        "blue" => css::BLUE.into(),
        "gray" | "grey" => css::GRAY.into(),
        "lightgray" | "lightgrey" => css::LIGHT_GRAY.into(),
        "yellow" => css::YELLOW.into(),
        "green" => css::GREEN.into(),
        other => match Srgba::hex(other) {
            Ok(c) => c.into(),
            Err(_) => {
                warn!("unknown colour '{}', using white", other);
                Color::WHITE
            }
        },
    }
}
