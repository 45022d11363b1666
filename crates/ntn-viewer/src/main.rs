//! 3D viewer for the NTN orbit and connectivity simulation using Bevy.
//!
//! Three satellites circle a unit Earth while a ground receiver reports which
//! one, if any, is close enough to connect. The camera orbits the Earth and
//! the overlay shows the link status and signaling sequence.

mod camera;
mod coords;
mod scene;
mod simulation;
mod ui;

use std::time::Duration;

use bevy::prelude::*;
use camera::{CameraSettings, OrbitCamera, OrbitCameraPlugin};
use ntn_sim::Simulation;
use ntn_viewer::{launch_params, logging};
use scene::ScenePlugin;
use simulation::{SimulationDriver, SimulationPlugin};
use ui::OverlayUiPlugin;

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SimulationPlugin,
            OrbitCameraPlugin,
            ScenePlugin,
            OverlayUiPlugin,
        ))
        .add_systems(Startup, setup_camera);
    }
}

/// Spawn the orbit camera; its transform is set from `CameraSettings`.
#[allow(clippy::needless_pass_by_value)]
fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    let eye = coords::to_render(settings.eye());

    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: bevy::camera::ClearColorConfig::Custom(Color::srgb(0.02, 0.02, 0.05)),
            ..default()
        },
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.01,
            far: 100.0,
            ..Default::default()
        }),
        OrbitCamera,
    ));

    tracing::info!("Scene setup complete - drag the azimuth slider or use arrow keys to rotate");
}

fn main() {
    logging::init();

    let params = launch_params::parse();
    let simulation = match Simulation::new(&params.config) {
        Ok(simulation) => simulation,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new();

    #[allow(unused_mut)]
    let mut window = Window {
        title: "ntn-viewer".to_string(),
        resolution: (1280, 720).into(),
        ..Default::default()
    };

    // WASM: Fit canvas to parent element and prevent browser event handling.
    #[cfg(target_family = "wasm")]
    {
        window.fit_canvas_to_parent = true;
        window.prevent_default_event_handling = true;
    }

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..Default::default()
    }));

    app.insert_resource(SimulationDriver::new(
        simulation,
        params.config.receiver.earth_radius,
        Duration::from_millis(params.frame_interval_ms),
    ))
    .insert_resource(CameraSettings {
        azimuth_deg: params.azimuth_deg,
        ..Default::default()
    })
    .insert_resource(params);

    app.add_plugins(AppPlugin).run();
}
