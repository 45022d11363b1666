//! Scene entities: Earth, ground receiver, satellites and their trails.
//!
//! Satellite markers are moved to the positions of the latest snapshot. Trails
//! and the active link are drawn with gizmos every frame from the simulation
//! state, so nothing here is ever removed and re-spawned.

use bevy::prelude::*;

use ntn_viewer::launch_params::LaunchParams;

use crate::coords::to_render;
use crate::simulation::SimulationDriver;

/// Radius of a satellite marker in Earth radii.
const SATELLITE_MARKER_RADIUS: f32 = 0.03;
/// Radius of the receiver marker in Earth radii.
const RECEIVER_MARKER_RADIUS: f32 = 0.04;
/// Alpha applied to trail lines.
const TRAIL_ALPHA: f32 = 0.5;
/// Earth color when no texture is configured.
const OCEAN_COLOR: Color = Color::srgb(0.12, 0.32, 0.62);

/// Plugin for the scene entities.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene_entities)
            .add_systems(Update, (update_satellite_markers, draw_trails, draw_link));
    }
}

/// Marker for a satellite entity; holds the satellite index.
#[derive(Component)]
pub struct SatelliteMarker(pub usize);

/// Convert simulation sRGB components to a Bevy color.
pub fn satellite_color(color: [f32; 3]) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

/// Earth material; a texture replaces the plain ocean color.
fn earth_material(texture: Option<Handle<Image>>) -> StandardMaterial {
    StandardMaterial {
        base_color: if texture.is_some() {
            Color::WHITE
        } else {
            OCEAN_COLOR
        },
        base_color_texture: texture,
        perceptual_roughness: 0.9,
        ..default()
    }
}

/// Spawn the Earth, the receiver and one marker per satellite.
#[allow(clippy::needless_pass_by_value)]
fn spawn_scene_entities(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    driver: Res<SimulationDriver>,
    params: Res<LaunchParams>,
) {
    #[allow(clippy::cast_possible_truncation)]
    let earth_radius = driver.earth_radius as f32;
    let texture = params.earth_texture.as_ref().map(|path| {
        tracing::info!("Loading Earth texture from {path}");
        asset_server.load(path.clone())
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(earth_radius).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(earth_material(texture))),
        Transform::IDENTITY,
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(RECEIVER_MARKER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(to_render(driver.simulation.receiver())),
    ));

    let marker_mesh = meshes.add(Sphere::new(SATELLITE_MARKER_RADIUS));
    for satellite in driver.simulation.satellites() {
        let color = satellite_color(satellite.color);
        commands.spawn((
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * 0.5,
                ..default()
            })),
            Transform::IDENTITY,
            // Hidden until the first frame has a position for it.
            Visibility::Hidden,
            SatelliteMarker(satellite.index),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 2.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    tracing::debug!(
        satellites = driver.simulation.satellites().len(),
        "Scene entities spawned"
    );
}

/// Move satellite markers to the latest snapshot.
#[allow(clippy::needless_pass_by_value)]
fn update_satellite_markers(
    driver: Res<SimulationDriver>,
    mut query: Query<(&SatelliteMarker, &mut Transform, &mut Visibility)>,
) {
    if !driver.is_changed() {
        return;
    }

    for (marker, mut transform, mut visibility) in &mut query {
        match driver
            .latest
            .as_ref()
            .and_then(|frame| frame.positions.get(marker.0))
        {
            Some(&position) => {
                transform.translation = to_render(position);
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

/// Draw each satellite's accumulated path.
#[allow(clippy::needless_pass_by_value)]
fn draw_trails(mut gizmos: Gizmos, driver: Res<SimulationDriver>) {
    let satellites = driver.simulation.satellites();
    for (satellite, trail) in satellites.iter().zip(driver.simulation.trails()) {
        if trail.len() < 2 {
            continue;
        }
        let color = satellite_color(satellite.color).with_alpha(TRAIL_ALPHA);
        gizmos.linestrip(trail.points().iter().copied().map(to_render), color);
    }
}

/// Draw a line from the connected satellite to the receiver.
#[allow(clippy::needless_pass_by_value)]
fn draw_link(mut gizmos: Gizmos, driver: Res<SimulationDriver>) {
    let Some(frame) = driver.latest.as_ref() else {
        return;
    };
    let Some(position) = frame
        .status
        .connected_satellite()
        .and_then(|index| frame.positions.get(index))
    else {
        return;
    };

    gizmos.line(
        to_render(*position),
        to_render(driver.simulation.receiver()),
        Color::srgb(0.5, 0.0, 0.5),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_material_without_texture() {
        let material = earth_material(None);
        assert_eq!(material.base_color, OCEAN_COLOR);
        assert!(material.base_color_texture.is_none());
    }

    #[test]
    fn test_earth_material_with_texture() {
        let material = earth_material(Some(Handle::default()));
        assert_eq!(material.base_color, Color::WHITE);
        assert!(material.base_color_texture.is_some());
    }
}
