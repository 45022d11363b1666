//! Connection overlay, legend and view controls.
//!
//! Shows the current connection label and signaling block, a legend with
//! each satellite's color, and the azimuth slider.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use ntn_sim::coords::cartesian_to_lat_lon;
use ntn_viewer::launch_params::LaunchParams;

use crate::camera::CameraSettings;
use crate::simulation::SimulationDriver;

/// Color of the signaling message lines.
const MESSAGE_COLOR: egui::Color32 = egui::Color32::from_rgb(128, 0, 128);

/// Plugin for the egui overlay.
pub struct OverlayUiPlugin;

impl Plugin for OverlayUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(EguiPrimaryContextPass, (connection_ui_system, legend_ui_system));
    }
}

/// Convert simulation sRGB components to an egui color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn egui_color(color: [f32; 3]) -> egui::Color32 {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgb(r, g, b)
}

/// Render the connection status and run controls.
#[allow(clippy::needless_pass_by_value)]
fn connection_ui_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    mut driver: ResMut<SimulationDriver>,
    mut settings: ResMut<CameraSettings>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(bevy::diagnostic::Diagnostic::smoothed)
        .unwrap_or(0.0);

    let frames_elapsed = driver.frames_elapsed();
    let max_frames = driver.simulation.max_frames();
    let threshold = driver.simulation.monitor().threshold();
    let status = driver.simulation.status().clone();
    let latest_positions = driver
        .latest
        .as_ref()
        .map(|frame| frame.positions.clone())
        .unwrap_or_default();

    let mut restart = false;
    egui::Window::new("Link")
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            ui.heading(&status.label);
            for line in &status.message {
                ui.colored_label(MESSAGE_COLOR, line);
            }
            match status.distance_to_receiver {
                Some(distance) => {
                    ui.label(format!("Distance: {distance:.3} R⊕ (< {threshold:.2})"));
                }
                None => {
                    ui.label(format!("Threshold: {threshold:.2} R⊕"));
                }
            }
            if let Some(position) = status
                .connected_satellite()
                .and_then(|index| latest_positions.get(index))
            {
                let (lat, lon) = cartesian_to_lat_lon(*position);
                ui.label(format!("Sub-point: {lat:.2}°, {lon:.2}°"));
            }

            ui.separator();
            ui.label(format!("Frame: {frames_elapsed} / {max_frames}"));
            ui.label(format!("FPS: {fps:.0}"));

            ui.horizontal(|ui| {
                let pause_label = if driver.paused { "Resume" } else { "Pause" };
                if ui.button(pause_label).clicked() {
                    driver.paused = !driver.paused;
                }
                if ui.button("Restart").clicked() {
                    restart = true;
                }
            });

            ui.separator();
            ui.add(
                egui::Slider::new(&mut settings.azimuth_deg, 0.0..=360.0)
                    .text("Azimuth")
                    .step_by(1.0)
                    .suffix("°"),
            );
            ui.label("  ←/→ - Rotate");
            ui.label("  Scroll - Zoom");
        });

    if restart {
        driver.restart();
    }

    Ok(())
}

/// Render the legend naming the receiver and each satellite.
#[allow(clippy::needless_pass_by_value)]
fn legend_ui_system(
    mut contexts: EguiContexts,
    driver: Res<SimulationDriver>,
    params: Res<LaunchParams>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let receiver = &params.config.receiver;

    egui::Window::new("Legend")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "Receiver ({:.2}°, {:.2}°)",
                receiver.lat_deg, receiver.lon_deg
            ));
            for satellite in driver.simulation.satellites() {
                ui.colored_label(
                    egui_color(satellite.color),
                    format!("{} Satellite", satellite.designation()),
                );
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_egui_color() {
        assert_eq!(egui_color([1.0, 0.0, 0.0]), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(
            egui_color([1.0, 0.753, 0.796]),
            egui::Color32::from_rgb(255, 192, 203)
        );
    }
}
