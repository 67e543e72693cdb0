use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Resource, Default)]
struct ViewerState {
    show_grid: bool,
}

const BODY_RADIUS: f32 = 5.0; // cells
const SELECTION_RADIUS: f32 = 6.0; // cells
const HIT_BOX: f64 = 5.0; // cells, centred on the body
const MARK_SIZE: f32 = 2.0; // pixels

const GRAVITY_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const VELOCITY_COLOR: Color = Color::srgb(1.0, 0.0, 0.61);
const PATH_COLOR: Color = Color::srgb(0.0, 0.61, 0.61);
const SELECTION_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);
const GRID_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

pub fn run_2d(sim: Simulation) {
    let (width, height) = window_size(sim.parameters());

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(sim)
        .init_resource::<ViewerState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "OrbitSim".into(),
                resolution: WindowResolution::new(width, height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (keyboard_system, mouse_system, sync_transforms_system, draw_system).chain(),
        )
        .run();
}

/// Window size in pixels, computed in f32 so large grids cannot overflow
pub fn window_size(p: &Parameters) -> (f32, f32) {
    let s = p.scale as f32;
    (p.grid_width as f32 * s, p.grid_height as f32 * s)
}

/// Grid position -> world position, grid origin at the window's bottom-left
fn to_world(p: &Parameters, x: NVec2) -> Vec2 {
    let s = p.scale as f64;
    Vec2::new(
        ((x.x - p.grid_width as f64 / 2.0) * s) as f32,
        ((x.y - p.grid_height as f64 / 2.0) * s) as f32,
    )
}

fn setup_bodies_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    info!("starting 2D viewer with {} bodies", sim.bodies().len());
    commands.spawn(Camera2dBundle::default());

    let p = sim.parameters();
    for (i, body) in sim.bodies().iter().enumerate() {
        let [r, g, b] = body.color;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(BODY_RADIUS * p.scale as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_translation(to_world(p, body.x).extend(0.0)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
    mut viewer: ResMut<ViewerState>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Quitting...");
        exit.send(AppExit::Success);
        return;
    }

    if keys.just_pressed(KeyCode::KeyQ) {
        sim.decrease_velocity_scale();
    }
    if keys.just_pressed(KeyCode::KeyE) {
        sim.increase_velocity_scale();
    }
    if keys.just_pressed(KeyCode::KeyG) {
        viewer.show_grid = !viewer.show_grid;
    }

    let step = sim.velocity_step();
    let mut dv = NVec2::zeros();
    if keys.just_pressed(KeyCode::KeyA) {
        dv.x -= step;
    }
    if keys.just_pressed(KeyCode::KeyD) {
        dv.x += step;
    }
    if keys.just_pressed(KeyCode::KeyS) {
        dv.y -= step;
    }
    if keys.just_pressed(KeyCode::KeyW) {
        dv.y += step;
    }

    let iteration_step = sim.parameters().iteration_step as i64;
    let mut di = 0;
    if keys.just_pressed(KeyCode::KeyZ) {
        di += iteration_step;
    }
    if keys.just_pressed(KeyCode::KeyX) {
        di -= iteration_step;
    }

    if dv == NVec2::zeros() && di == 0 {
        return;
    }

    for i in sim.selected() {
        if di != 0 {
            if let Err(e) = sim.adjust_path_iterations(i, di) {
                warn!(%e, "path iteration edit rejected");
            }
        }
        if dv != NVec2::zeros() {
            if let Err(e) = sim.adjust_body_velocity(i, dv.x, dv.y) {
                warn!(%e, "velocity edit rejected");
            }
        }
    }
    if di != 0 {
        sim.recompute();
    }
}

fn mouse_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sim: ResMut<Simulation>,
) {
    let moved = cursor_moved.read().last().is_some();

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    // window y grows downward, grid y grows upward
    let p = sim.parameters().clone();
    let s = p.scale as f64;
    let gx = cursor.x as f64 / s;
    let gy = p.grid_height as f64 - cursor.y as f64 / s;

    if buttons.just_pressed(MouseButton::Left) {
        let half = HIT_BOX / 2.0;
        let hits: Vec<bool> = sim
            .bodies()
            .iter()
            .map(|b| {
                !b.selected
                    && b.x.x - half < gx && gx < b.x.x + half
                    && b.x.y - half < gy && gy < b.x.y + half
            })
            .collect();
        for (i, hit) in hits.into_iter().enumerate() {
            if let Err(e) = sim.set_selected(i, hit) {
                warn!(%e, "selection failed");
            }
        }
        sim.recompute();
    } else if moved {
        for i in sim.selected() {
            if let Err(e) = sim.set_body_position(i, gx.trunc(), gy.trunc()) {
                warn!(%e, "drag failed");
            }
        }
    }
}

fn sync_transforms_system(sim: Res<Simulation>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let p = sim.parameters();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = sim.bodies().get(*i) {
            let w = to_world(p, b.x);
            transform.translation.x = w.x;
            transform.translation.y = w.y;
        }
    }
}

fn draw_system(mut gizmos: Gizmos, sim: Res<Simulation>, viewer: Res<ViewerState>) {
    let p = sim.parameters();
    let s = p.scale as f32;

    if viewer.show_grid {
        let (w, h) = (p.grid_width as f64, p.grid_height as f64);
        for i in 0..p.grid_width {
            let x = i as f64;
            gizmos.line_2d(to_world(p, NVec2::new(x, 0.0)), to_world(p, NVec2::new(x, h)), GRID_COLOR);
        }
        for i in 0..p.grid_height {
            let y = i as f64;
            gizmos.line_2d(to_world(p, NVec2::new(0.0, y)), to_world(p, NVec2::new(w, y)), GRID_COLOR);
        }
    }

    let state = sim.render_state();

    for b in &state.bodies {
        let origin = to_world(p, b.x);
        if b.selected {
            gizmos.circle_2d(origin, SELECTION_RADIUS * s, SELECTION_COLOR);
        }
        gizmos.arrow_2d(origin, to_world(p, b.x + b.gravity_force.vector), GRAVITY_COLOR);
        gizmos.arrow_2d(origin, to_world(p, b.x + b.velocity_force), VELOCITY_COLOR);
        gizmos.arrow_2d(origin, to_world(p, b.x + b.path_vector), PATH_COLOR);
    }

    for c in &state.visited {
        let at = to_world(p, NVec2::new(c.x as f64, c.y as f64));
        gizmos.rect_2d(at, 0.0, Vec2::splat(MARK_SIZE), Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_scales_grid() {
        assert_eq!(window_size(&Parameters::default()), (500.0, 500.0));
    }

    #[test]
    fn window_size_survives_huge_grid() {
        let p = Parameters { grid_width: u32::MAX, grid_height: u32::MAX, scale: 5, ..Parameters::default() };
        let (w, h) = window_size(&p);
        assert!(w.is_finite() && h.is_finite());
        assert!(w > u32::MAX as f32);
        assert_eq!(w, h);
    }
}
