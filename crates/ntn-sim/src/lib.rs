//! Orbit and connectivity simulation core for a simplified non-terrestrial
//! network scenario.
//!
//! A handful of satellites move on circular orbits around a unit Earth while a
//! fixed ground receiver watches for the first one to come within a distance
//! threshold. Whenever one does, a fixed illustrative signaling sequence is
//! reported for that frame.
//!
//! # Design principles
//!
//! - **Pure stepping**: positions are a closed-form function of time
//! - **Explicit state**: trails and the last status live in [`SimulationState`]
//! - **Render-agnostic**: steps return [`FrameSnapshot`] values; drawing is
//!   left to the caller
//!
//! # Example
//!
//! ```
//! use ntn_sim::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::new(&SimulationConfig::default())?;
//! while let Some(frame) = sim.advance() {
//!     println!("{}: {}", frame.frame, frame.status.label);
//! }
//! # Ok::<(), ntn_sim::ConfigError>(())
//! ```

pub mod config;
pub mod connectivity;
pub mod coords;
mod error;
pub mod orbit;
mod simulation;

pub use config::{ReceiverConfig, SatelliteConfig, SimulationConfig};
pub use connectivity::{
    ConnectionState, ConnectionStatus, ConnectivityMonitor, NO_CONNECTION_LABEL,
    SIGNALING_SEQUENCE,
};
pub use error::{ConfigError, Result};
pub use orbit::{OrbitEngine, Satellite, Trail, designation};
pub use simulation::{FrameSnapshot, Simulation, SimulationState};
