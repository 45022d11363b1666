//! Distance-based connection detection.
//!
//! Each evaluation is a fresh scan over the current positions: there is no
//! handshake and no memory of earlier frames. The signaling block is a fixed
//! illustrative sequence shown while any satellite is in range.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::orbit::designation;

/// Label shown when no satellite is within range.
pub const NO_CONNECTION_LABEL: &str = "No satellite connected";

/// Signaling lines displayed while a satellite is connected.
///
/// The same block is used for every satellite.
pub const SIGNALING_SEQUENCE: [&str; 7] = [
    "RRC Connection Setup Complete",
    "Authentication-Request",
    "Authentication-Response",
    "NR-NTN-Channel-Request",
    "NR-NTN-Channel-Allocation",
    "Data-Request",
    "Data-Response",
];

/// Logical link state for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    /// Connected to the satellite with this index.
    ConnectedTo(usize),
}

/// Result of evaluating one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub state: ConnectionState,
    /// Human-readable label, e.g. `Connected to Satellite n511`.
    pub label: String,
    /// Signaling lines; empty when disconnected.
    pub message: Vec<String>,
    /// Distance from the connected satellite to the receiver.
    pub distance_to_receiver: Option<f64>,
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl ConnectionStatus {
    pub fn disconnected() -> Self {
        Self {
            state: ConnectionState::Disconnected,
            label: NO_CONNECTION_LABEL.to_string(),
            message: Vec::new(),
            distance_to_receiver: None,
        }
    }

    pub fn connected(index: usize, distance: f64) -> Self {
        Self {
            state: ConnectionState::ConnectedTo(index),
            label: format!("Connected to Satellite {}", designation(index)),
            message: SIGNALING_SEQUENCE.iter().map(ToString::to_string).collect(),
            distance_to_receiver: Some(distance),
        }
    }

    /// Index of the connected satellite, if any.
    pub fn connected_satellite(&self) -> Option<usize> {
        match self.state {
            ConnectionState::ConnectedTo(index) => Some(index),
            ConnectionState::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected_satellite().is_some()
    }
}

/// Decides which satellite, if any, is in range of the receiver.
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityMonitor {
    threshold: f64,
}

impl ConnectivityMonitor {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Distance below which a satellite counts as connected.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Evaluate the link state for one frame.
    ///
    /// Satellites are scanned in index order and the first one strictly closer
    /// than the threshold wins.
    pub fn evaluate(&self, positions: &[DVec3], receiver: DVec3) -> ConnectionStatus {
        positions
            .iter()
            .enumerate()
            .map(|(index, position)| (index, position.distance(receiver)))
            .find(|&(_, distance)| distance < self.threshold)
            .map_or_else(ConnectionStatus::disconnected, |(index, distance)| {
                ConnectionStatus::connected(index, distance)
            })
    }
}
