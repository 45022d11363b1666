//! Orbit camera looking at the Earth.
//!
//! The camera sits on a sphere around the Earth's center. Azimuth is exposed
//! in the UI; elevation is fixed at 30 degrees by default. Only the view
//! changes: the simulation never reads camera state.

use bevy::ecs::message::MessageReader;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::input::{egui_wants_any_keyboard_input, egui_wants_any_pointer_input};
use glam::DVec3;

use crate::coords::to_render;

/// Minimum camera distance from the Earth's center in Earth radii.
pub const MIN_DISTANCE: f32 = 1.5;
/// Maximum camera distance from the Earth's center in Earth radii.
pub const MAX_DISTANCE: f32 = 20.0;
/// Azimuth change per second while an arrow key is held.
const AZIMUTH_RATE_DEG: f32 = 60.0;

/// Plugin for the orbit camera.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>().add_systems(
            Update,
            (
                zoom_with_scroll.run_if(not(egui_wants_any_pointer_input)),
                rotate_with_keys.run_if(not(egui_wants_any_keyboard_input)),
                apply_camera_settings,
            )
                .chain(),
        );
    }
}

/// View parameters for the orbit camera.
#[derive(Resource)]
pub struct CameraSettings {
    /// Azimuth in degrees around the polar axis, measured from +x.
    pub azimuth_deg: f32,
    /// Elevation above the equatorial plane in degrees.
    pub elevation_deg: f32,
    /// Distance from the Earth's center in Earth radii.
    pub distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            azimuth_deg: 45.0,
            elevation_deg: 30.0,
            distance: 4.0,
        }
    }
}

impl CameraSettings {
    /// Camera position in simulation coordinates.
    pub fn eye(&self) -> DVec3 {
        let azimuth = f64::from(self.azimuth_deg).to_radians();
        let elevation = f64::from(self.elevation_deg).to_radians();
        f64::from(self.distance)
            * DVec3::new(
                elevation.cos() * azimuth.cos(),
                elevation.cos() * azimuth.sin(),
                elevation.sin(),
            )
    }
}

/// Marker component for the orbit camera.
#[derive(Component)]
pub struct OrbitCamera;

/// Zoom in and out with the scroll wheel.
fn zoom_with_scroll(
    mut scroll_events: MessageReader<MouseWheel>,
    mut settings: ResMut<CameraSettings>,
) {
    for event in scroll_events.read() {
        // Normalize scroll value: web reports pixels, native reports lines.
        let scroll = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 120.0,
        };
        if scroll != 0.0 {
            let factor = 1.1_f32.powf(-scroll);
            settings.distance = (settings.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }
}

/// Rotate the azimuth with the left and right arrow keys.
fn rotate_with_keys(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<CameraSettings>,
) {
    let mut direction = 0.0;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        direction -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        direction += 1.0;
    }
    if direction != 0.0 {
        let azimuth = settings.azimuth_deg + direction * AZIMUTH_RATE_DEG * time.delta_secs();
        settings.azimuth_deg = azimuth.rem_euclid(360.0);
    }
}

/// Place the camera according to the current settings.
#[allow(clippy::needless_pass_by_value)]
fn apply_camera_settings(
    settings: Res<CameraSettings>,
    mut query: Query<&mut Transform, With<OrbitCamera>>,
) {
    if !settings.is_changed() {
        return;
    }
    let eye = to_render(settings.eye());
    for mut transform in &mut query {
        *transform = Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_distance() {
        let settings = CameraSettings::default();
        assert!((settings.eye().length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_eye_elevation() {
        let settings = CameraSettings {
            azimuth_deg: 0.0,
            elevation_deg: 30.0,
            distance: 2.0,
        };
        let eye = settings.eye();
        assert!((eye.z - 1.0).abs() < 1e-6);
        assert!(eye.y.abs() < 1e-9);
    }
}
