//! Frame-stepped simulation driver state.
//!
//! [`Simulation`] owns the orbit engine, the connectivity monitor and the
//! mutable [`SimulationState`]. Each step returns a [`FrameSnapshot`] that a
//! renderer can consume without touching the simulation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::connectivity::{ConnectionStatus, ConnectivityMonitor};
use crate::error::Result;
use crate::orbit::{OrbitEngine, Satellite, Trail};

/// Mutable state carried between frames.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    /// One trail per satellite, in index order.
    pub trails: Vec<Trail>,
    /// Status computed by the most recent step.
    pub status: ConnectionStatus,
    /// Number of steps taken so far.
    pub frames_elapsed: u64,
}

/// Output of a single step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Zero-based frame index.
    pub frame: u64,
    /// Simulation time the frame was computed at.
    pub t: f64,
    /// Satellite positions in index order.
    pub positions: Vec<DVec3>,
    pub status: ConnectionStatus,
}

/// The orbit/connectivity simulation for one run.
#[derive(Debug, Clone)]
pub struct Simulation {
    engine: OrbitEngine,
    monitor: ConnectivityMonitor,
    receiver: DVec3,
    max_frames: u64,
    state: SimulationState,
}

impl Simulation {
    /// Validate `config` and build a simulation with empty trails.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let satellites = config
            .satellites
            .iter()
            .enumerate()
            .map(|(index, satellite)| Satellite::from_config(index, satellite))
            .collect();
        let engine = OrbitEngine::new(satellites, config.receiver.lat_rad());
        let receiver = config.receiver.position();

        tracing::debug!(
            satellites = config.satellites.len(),
            receiver = ?receiver,
            threshold = config.connection_threshold,
            max_frames = config.max_frames(),
            "Simulation initialized"
        );

        let state = SimulationState {
            trails: engine.empty_trails(),
            ..SimulationState::default()
        };

        Ok(Self {
            engine,
            monitor: ConnectivityMonitor::new(config.connection_threshold),
            receiver,
            max_frames: config.max_frames(),
            state,
        })
    }

    pub fn satellites(&self) -> &[Satellite] {
        self.engine.satellites()
    }

    /// Connectivity monitor, including its distance threshold.
    pub fn monitor(&self) -> &ConnectivityMonitor {
        &self.monitor
    }

    /// Fixed receiver position.
    pub fn receiver(&self) -> DVec3 {
        self.receiver
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn trails(&self) -> &[Trail] {
        &self.state.trails
    }

    /// Latest connection status.
    pub fn status(&self) -> &ConnectionStatus {
        &self.state.status
    }

    pub fn max_frames(&self) -> u64 {
        self.max_frames
    }

    /// Whether the frame budget has been spent.
    pub fn is_finished(&self) -> bool {
        self.state.frames_elapsed >= self.max_frames
    }

    /// Run one frame at time `t`, regardless of the frame budget.
    pub fn step(&mut self, t: f64) -> FrameSnapshot {
        let positions = self.engine.step(t, &mut self.state.trails);
        let status = self.monitor.evaluate(&positions, self.receiver);

        if status.state != self.state.status.state {
            match status.connected_satellite() {
                Some(index) => tracing::info!(
                    frame = self.state.frames_elapsed,
                    t,
                    satellite = index,
                    distance = status.distance_to_receiver,
                    "{}",
                    status.label
                ),
                None => tracing::info!(frame = self.state.frames_elapsed, t, "Link lost"),
            }
        }

        let frame = self.state.frames_elapsed;
        self.state.frames_elapsed += 1;
        self.state.status = status.clone();

        FrameSnapshot {
            frame,
            t,
            positions,
            status,
        }
    }

    /// Run the next frame using the frame index as time.
    ///
    /// Returns `None` once the frame budget is spent.
    pub fn advance(&mut self) -> Option<FrameSnapshot> {
        if self.is_finished() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let t = self.state.frames_elapsed as f64;
        Some(self.step(t))
    }

    /// Run every remaining frame and collect the snapshots.
    pub fn run_to_completion(&mut self) -> Vec<FrameSnapshot> {
        std::iter::from_fn(|| self.advance()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReceiverConfig, SatelliteConfig};
    use crate::connectivity::ConnectionState;
    use crate::error::ConfigError;

    #[test]
    fn test_rejects_invalid_config() {
        let config = SimulationConfig {
            connection_threshold: -1.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            Simulation::new(&config),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_frame_budget() {
        let config = SimulationConfig {
            max_cycles: 2,
            frames_per_cycle: 5,
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();
        let frames = sim.run_to_completion();
        assert_eq!(frames.len(), 10);
        assert!(sim.is_finished());
        assert!(sim.advance().is_none());
        for trail in sim.trails() {
            assert_eq!(trail.len(), 10);
        }
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.frame, i as u64);
            assert!((frame.t - i as f64).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_step_updates_state() {
        let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
        let snapshot = sim.step(12.0);
        assert_eq!(sim.state().frames_elapsed, 1);
        assert_eq!(sim.status(), &snapshot.status);
        for (trail, position) in sim.trails().iter().zip(&snapshot.positions) {
            assert_eq!(trail.last(), Some(*position));
        }
    }

    #[test]
    fn test_connects_when_satellite_passes_over_receiver() {
        // Satellite 1 passes directly over an equatorial receiver at t = 0.
        let config = SimulationConfig {
            satellites: vec![
                SatelliteConfig::new(3.0, 10.0, [1.0, 0.0, 0.0]),
                SatelliteConfig::new(1.05, 40.0, [1.0, 1.0, 0.0]),
            ],
            receiver: ReceiverConfig {
                lat_deg: 0.0,
                lon_deg: 0.0,
                earth_radius: 1.0,
                height_offset: 0.0,
            },
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();

        let overhead = sim.step(0.0);
        assert_eq!(overhead.status.state, ConnectionState::ConnectedTo(1));
        assert_eq!(overhead.status.label, "Connected to Satellite n511");

        let away = sim.step(20.0);
        assert_eq!(away.status, ConnectionStatus::disconnected());
        assert_eq!(sim.status(), &ConnectionStatus::disconnected());
    }

    #[test]
    fn test_status_tracks_closest_satellite() {
        let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
        let receiver = sim.receiver();
        for frame in sim.run_to_completion() {
            let closest = frame
                .positions
                .iter()
                .map(|p| p.distance(receiver))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(frame.status.is_connected(), closest < 0.2);
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let config = SimulationConfig::default();
        let a = Simulation::new(&config).unwrap().run_to_completion();
        let b = Simulation::new(&config).unwrap().run_to_completion();
        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
        let snapshot = sim.step(1.0);
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.frame, 0);
        assert_eq!(decoded.positions.len(), 3);
        assert_eq!(decoded.status.label, snapshot.status.label);
        assert_eq!(decoded.status.state, snapshot.status.state);
    }
}
