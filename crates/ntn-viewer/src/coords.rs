//! Conversion from the simulation frame to Bevy's render frame.
//!
//! The simulation uses Earth-centered coordinates with +z through the north
//! pole. Bevy is Y-up, so the north pole maps to +y.

use glam::DVec3;

/// Convert a simulation position to a render-space translation.
#[allow(clippy::cast_possible_truncation)]
pub fn to_render(position: DVec3) -> bevy::math::Vec3 {
    bevy::math::Vec3::new(position.x as f32, position.z as f32, -position.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_pole_is_up() {
        let p = to_render(DVec3::Z);
        assert_eq!(p, bevy::math::Vec3::Y);
    }

    #[test]
    fn test_preserves_length() {
        let v = DVec3::new(0.3, -1.2, 0.7);
        assert!((f64::from(to_render(v).length()) - v.length()).abs() < 1e-6);
    }
}
