use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::error::{SimError, SimResult};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::ANCHOR;
use crate::visualization::style::{anchor_radius, body_radius, body_shade, to_screen};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Red overlay drawn on top of the anchor body
#[derive(Component)]
struct AnchorMarker;

/// Open a window the size of the world box and advance the scenario once
/// per frame (or `steps_per_frame` times) until the window is closed.
/// A numerical blow-up closes the window and comes back as an error.
pub fn run_viewer(scenario: Scenario) -> SimResult<()> {
    ::log::info!("run_viewer: starting Bevy 2D viewer with {} bodies", scenario.system.len());

    let world = *scenario.system.world();
    let title = scenario.title.clone();

    let exit = App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        resolution: WindowResolution::new(world.width as f32, world.height as f32),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // env_logger already owns the `log` facade
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();

    exit_outcome(exit)
}

/// The physics system only ever requests an error exit after a failed step
fn exit_outcome(exit: AppExit) -> SimResult<()> {
    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(_) => Err(SimError::Corrupted),
    }
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    // Unit disc, sized per frame through the transform scale
    let disc = Mesh2dHandle(meshes.add(Circle::new(1.0)));

    for i in 0..scenario.system.len() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: disc.clone(),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(0.0, 0.0, i as f32 * 1e-3),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: disc,
            material: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.0, 0.0))),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..Default::default()
        },
        AnchorMarker,
    ));
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>) {
    let steps = scenario.steps_per_frame;
    for _ in 0..steps {
        if let Err(e) = scenario.system.step() {
            ::log::error!("stopping viewer: {e}");
            exit.send(AppExit::error());
            return;
        }
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut bodies: Query<(&BodyIndex, &mut Transform, &Handle<ColorMaterial>), Without<AnchorMarker>>,
    mut anchor: Query<&mut Transform, With<AnchorMarker>>,
) {
    let system = &scenario.system;
    let world = system.world();
    let positions = system.positions();

    for (BodyIndex(i), mut transform, mat_handle) in &mut bodies {
        if let Some(x) = positions.get(*i) {
            let (sx, sy) = to_screen(x, world);
            transform.translation.x = sx;
            transform.translation.y = sy;
            transform.scale = Vec3::splat(body_radius(x));

            let shade = body_shade(x);
            if let Some(mat) = materials.get_mut(mat_handle) {
                mat.color = Color::srgb_u8(shade, shade, shade);
            }
        }
    }

    if let (Ok(mut transform), Some(x)) = (anchor.get_single_mut(), positions.get(ANCHOR)) {
        let (sx, sy) = to_screen(x, world);
        transform.translation.x = sx;
        transform.translation.y = sy;
        transform.scale = Vec3::splat(anchor_radius(x));
    }
}
