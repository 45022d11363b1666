//! Circular orbit propagation.
//!
//! Every satellite moves on a circle centered on the Earth's axis, in a plane
//! tilted by the receiver's latitude. Positions are a closed-form function of
//! time, so stepping backwards or jumping ahead is always valid.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::config::SatelliteConfig;

/// Designation number of the first satellite; satellite `i` is `n{510 + i}`.
pub const FIRST_DESIGNATION: usize = 510;

/// Display designation for the satellite at `index`, e.g. `n511`.
pub fn designation(index: usize) -> String {
    format!("n{}", FIRST_DESIGNATION + index)
}

/// An immutable satellite definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    /// Position in the scenario, starting at 0.
    pub index: usize,
    /// Orbital radius in Earth-radius units.
    pub radius: f64,
    /// Time units per revolution.
    pub period: f64,
    /// Display color as sRGB components.
    pub color: [f32; 3],
}

impl Satellite {
    pub fn from_config(index: usize, config: &SatelliteConfig) -> Self {
        Self {
            index,
            radius: config.radius,
            period: config.period,
            color: config.color,
        }
    }

    /// Display designation, e.g. `n510`.
    pub fn designation(&self) -> String {
        designation(self.index)
    }

    /// Orbital phase angle in radians at time `t`.
    ///
    /// `t` is reduced into a single period first, so the angle stays within
    /// one turn and is finite for every finite `t`.
    pub fn angle_at(&self, t: f64) -> f64 {
        TAU * ((t % self.period) / self.period)
    }

    /// Position at time `t` on an orbit tilted by `inclination` radians.
    pub fn position_at(&self, t: f64, inclination: f64) -> DVec3 {
        let angle = self.angle_at(t);
        let (sin_inc, cos_inc) = inclination.sin_cos();
        DVec3::new(
            self.radius * angle.cos() * cos_inc,
            self.radius * angle.sin() * cos_inc,
            self.radius * sin_inc,
        )
    }
}

/// Ordered history of a satellite's positions, one entry per step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: Vec<DVec3>,
}

impl Trail {
    pub fn push(&mut self, position: DVec3) {
        self.points.push(position);
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent position, if any step has run.
    pub fn last(&self) -> Option<DVec3> {
        self.points.last().copied()
    }
}

/// Maps simulation time to satellite positions.
#[derive(Debug, Clone)]
pub struct OrbitEngine {
    satellites: Vec<Satellite>,
    inclination: f64,
}

impl OrbitEngine {
    /// Create an engine whose orbital planes are tilted by `inclination` radians.
    pub fn new(satellites: Vec<Satellite>, inclination: f64) -> Self {
        Self {
            satellites,
            inclination,
        }
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Shared inclination of every orbit in radians.
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Create one empty trail per satellite.
    pub fn empty_trails(&self) -> Vec<Trail> {
        vec![Trail::default(); self.satellites.len()]
    }

    /// Positions of every satellite at time `t`, in index order.
    pub fn positions_at(&self, t: f64) -> Vec<DVec3> {
        self.satellites
            .iter()
            .map(|satellite| satellite.position_at(t, self.inclination))
            .collect()
    }

    /// Compute positions at time `t` and append each one to its trail.
    ///
    /// `trails` must hold one trail per satellite, as returned by
    /// [`OrbitEngine::empty_trails`].
    ///
    /// # Panics
    ///
    /// Panics if `trails` does not have one entry per satellite.
    pub fn step(&self, t: f64, trails: &mut [Trail]) -> Vec<DVec3> {
        assert_eq!(
            trails.len(),
            self.satellites.len(),
            "one trail per satellite is required"
        );
        let positions = self.positions_at(t);
        for (trail, &position) in trails.iter_mut().zip(&positions) {
            trail.push(position);
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::SimulationConfig;

    fn default_engine() -> OrbitEngine {
        let config = SimulationConfig::default();
        let satellites = config
            .satellites
            .iter()
            .enumerate()
            .map(|(index, satellite)| Satellite::from_config(index, satellite))
            .collect();
        OrbitEngine::new(satellites, config.receiver.lat_rad())
    }

    #[test]
    fn test_designation() {
        assert_eq!(designation(0), "n510");
        assert_eq!(designation(2), "n512");
    }

    #[test]
    fn test_start_position() {
        let engine = default_engine();
        let inc = engine.inclination();
        let positions = engine.positions_at(0.0);
        assert!((positions[0].x - 1.1 * inc.cos()).abs() < 1e-12);
        assert!(positions[0].y.abs() < 1e-12);
        assert!((positions[0].z - 1.1 * inc.sin()).abs() < 1e-12);
    }

    #[test]
    fn test_quarter_period() {
        let engine = default_engine();
        let inc = engine.inclination();
        // Satellite 1 has period 25.
        let position = engine.positions_at(6.25)[1];
        assert!(position.x.abs() < 1e-12);
        assert!((position.y - 1.2 * inc.cos()).abs() < 1e-12);
    }

    #[test]
    fn test_trail_growth_in_call_order() {
        let engine = default_engine();
        let mut trails = engine.empty_trails();
        let times = [3.0, -1.0, 7.5, 100.0];
        for &t in &times {
            engine.step(t, &mut trails);
        }
        for (i, trail) in trails.iter().enumerate() {
            assert_eq!(trail.len(), times.len());
            for (point, &t) in trail.points().iter().zip(&times) {
                assert_eq!(*point, engine.positions_at(t)[i]);
            }
        }
    }

    #[test]
    fn test_step_matches_pure_positions() {
        let engine = default_engine();
        let mut trails = engine.empty_trails();
        let stepped = engine.step(42.0, &mut trails);
        assert_eq!(stepped, engine.positions_at(42.0));
        assert_eq!(trails[0].last(), Some(stepped[0]));
    }

    #[test]
    fn test_negative_period_runs_backwards() {
        let forward = Satellite::from_config(0, &SatelliteConfig::new(1.0, 20.0, [1.0; 3]));
        let backward = Satellite::from_config(0, &SatelliteConfig::new(1.0, -20.0, [1.0; 3]));
        let a = forward.position_at(5.0, 0.0);
        let b = backward.position_at(5.0, 0.0);
        assert!((a.x - b.x).abs() < 1e-12);
        assert!((a.y + b.y).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "one trail per satellite")]
    fn test_step_rejects_short_trails() {
        let engine = default_engine();
        let mut trails = vec![Trail::default(); 2];
        engine.step(1.0, &mut trails);
    }

    #[test]
    fn test_huge_time_with_short_period() {
        let satellite = Satellite::from_config(0, &SatelliteConfig::new(1.1, 0.5, [1.0; 3]));
        let position = satellite.position_at(f64::MAX / 2.0, 0.43);
        assert!(position.is_finite());
        assert!((position.length() - 1.1).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_finite_for_any_time(
            t in proptest::num::f64::NORMAL,
            period in 0.01_f64..1.0,
        ) {
            let satellite = Satellite::from_config(0, &SatelliteConfig::new(1.1, period, [1.0; 3]));
            prop_assert!(satellite.position_at(t, 0.43).is_finite());
        }

        #[test]
        fn prop_orbit_geometry(t in -1.0e6_f64..1.0e6) {
            let engine = default_engine();
            let inc = engine.inclination();
            for (satellite, position) in engine.satellites().iter().zip(engine.positions_at(t)) {
                let horizontal = position.x.hypot(position.y);
                prop_assert!((horizontal - satellite.radius * inc.cos()).abs() < 1e-9);
                prop_assert_eq!(position.z, satellite.radius * inc.sin());
            }
        }

        #[test]
        fn prop_periodic(t in -1.0e4_f64..1.0e4) {
            let engine = default_engine();
            for satellite in engine.satellites() {
                let a = satellite.position_at(t, engine.inclination());
                let b = satellite.position_at(t + satellite.period, engine.inclination());
                prop_assert!((a - b).length() < 1e-9);
            }
        }

        #[test]
        fn prop_deterministic(t in proptest::num::f64::NORMAL) {
            let a = default_engine().positions_at(t);
            let b = default_engine().positions_at(t);
            prop_assert_eq!(a, b);
        }
    }
}
