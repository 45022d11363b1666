//! Coordinate conversion utilities.
//!
//! Positions are Earth-centered Cartesian coordinates in Earth-radius units,
//! with +z through the north pole. All conversions use a spherical Earth.

use glam::DVec3;

/// Convert latitude, longitude (degrees), and radius to Cartesian coordinates.
pub fn lat_lon_to_cartesian(lat_deg: f64, lon_deg: f64, radius: f64) -> DVec3 {
    let lat_rad = lat_deg.to_radians();
    let lon_rad = lon_deg.to_radians();
    DVec3::new(
        radius * lat_rad.cos() * lon_rad.cos(),
        radius * lat_rad.cos() * lon_rad.sin(),
        radius * lat_rad.sin(),
    )
}

/// Convert Cartesian coordinates to latitude and longitude (degrees).
///
/// Returns `(0.0, 0.0)` for the origin.
pub fn cartesian_to_lat_lon(position: DVec3) -> (f64, f64) {
    let length = position.length();
    if length == 0.0 {
        return (0.0, 0.0);
    }
    let lat_rad = (position.z / length).asin();
    let lon_rad = position.y.atan2(position.x);
    (lat_rad.to_degrees(), lon_rad.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_prime_meridian() {
        let p = lat_lon_to_cartesian(0.0, 0.0, 1.0);
        assert!((p - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_north_pole() {
        let p = lat_lon_to_cartesian(90.0, 123.0, 2.0);
        assert!(p.x.abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!((p.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_lat_lon_inverse() {
        let p = lat_lon_to_cartesian(24.7136, 46.6753, 1.0);
        let (lat, lon) = cartesian_to_lat_lon(p);
        assert!((lat - 24.7136).abs() < 1e-9);
        assert!((lon - 46.6753).abs() < 1e-9);
    }

    #[test]
    fn test_origin_has_no_direction() {
        assert_eq!(cartesian_to_lat_lon(DVec3::ZERO), (0.0, 0.0));
    }
}
