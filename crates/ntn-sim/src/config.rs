//! Static scenario configuration.
//!
//! The defaults reproduce the reference scenario: three satellites on
//! orbits of radius 1.1/1.2/1.3 Earth radii and a receiver in Riyadh.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::coords::lat_lon_to_cartesian;
use crate::error::{ConfigError, Result};

/// Default connection threshold in Earth-radius units.
pub const DEFAULT_CONNECTION_THRESHOLD: f64 = 0.2;
/// Default receiver latitude (Riyadh) in degrees.
pub const DEFAULT_RECEIVER_LAT: f64 = 24.7136;
/// Default receiver longitude (Riyadh) in degrees.
pub const DEFAULT_RECEIVER_LON: f64 = 46.6753;
/// Default receiver height offset in Earth-radius units.
pub const DEFAULT_HEIGHT_OFFSET: f64 = 0.1;
/// Default number of orbit cycles to simulate.
pub const DEFAULT_MAX_CYCLES: u32 = 1;
/// Default number of frames per cycle.
pub const DEFAULT_FRAMES_PER_CYCLE: u32 = 150;

/// Configuration of a single satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteConfig {
    /// Distance from Earth's center in Earth-radius units.
    pub radius: f64,
    /// Simulated time units per revolution. Negative values orbit backwards.
    pub period: f64,
    /// Display color as sRGB components in `0.0..=1.0`.
    pub color: [f32; 3],
}

impl SatelliteConfig {
    pub fn new(radius: f64, period: f64, color: [f32; 3]) -> Self {
        Self {
            radius,
            period,
            color,
        }
    }
}

/// Configuration of the fixed ground receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverConfig {
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Longitude in degrees.
    pub lon_deg: f64,
    /// Earth radius; the reference unit, normally 1.
    pub earth_radius: f64,
    /// Height added to the receiver's z coordinate.
    pub height_offset: f64,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            lat_deg: DEFAULT_RECEIVER_LAT,
            lon_deg: DEFAULT_RECEIVER_LON,
            earth_radius: 1.0,
            height_offset: DEFAULT_HEIGHT_OFFSET,
        }
    }
}

impl ReceiverConfig {
    /// Latitude in radians. Every orbital plane is tilted by this angle.
    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }

    /// Receiver position in Earth-centered coordinates.
    ///
    /// The height offset is applied along +z rather than radially.
    pub fn position(&self) -> DVec3 {
        let surface = lat_lon_to_cartesian(self.lat_deg, self.lon_deg, self.earth_radius);
        surface + DVec3::Z * self.height_offset
    }
}

/// Full simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub satellites: Vec<SatelliteConfig>,
    pub receiver: ReceiverConfig,
    /// Distance below which a satellite counts as connected.
    pub connection_threshold: f64,
    /// Number of cycles the driver runs before stopping.
    pub max_cycles: u32,
    /// Frames per cycle; each frame advances simulated time by one unit.
    pub frames_per_cycle: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            satellites: vec![
                SatelliteConfig::new(1.1, 20.0, [1.0, 0.0, 0.0]),
                SatelliteConfig::new(1.2, 25.0, [1.0, 1.0, 0.0]),
                SatelliteConfig::new(1.3, 30.0, [1.0, 0.753, 0.796]),
            ],
            receiver: ReceiverConfig::default(),
            connection_threshold: DEFAULT_CONNECTION_THRESHOLD,
            max_cycles: DEFAULT_MAX_CYCLES,
            frames_per_cycle: DEFAULT_FRAMES_PER_CYCLE,
        }
    }
}

impl SimulationConfig {
    /// Build a configuration from parallel per-satellite lists.
    ///
    /// Every list must have exactly `num_satellites` entries.
    pub fn from_parallel_lists(
        num_satellites: usize,
        radii: &[f64],
        periods: &[f64],
        colors: &[[f32; 3]],
    ) -> Result<Self> {
        for (field, actual) in [
            ("orbital_radius", radii.len()),
            ("orbital_period", periods.len()),
            ("satellite_colors", colors.len()),
        ] {
            if actual != num_satellites {
                return Err(ConfigError::LengthMismatch {
                    field,
                    expected: num_satellites,
                    actual,
                });
            }
        }

        let satellites = radii
            .iter()
            .zip(periods)
            .zip(colors)
            .map(|((&radius, &period), &color)| SatelliteConfig::new(radius, period, color))
            .collect();

        let config = Self {
            satellites,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Total number of frames the driver may run.
    pub fn max_frames(&self) -> u64 {
        u64::from(self.max_cycles) * u64::from(self.frames_per_cycle)
    }

    /// Check every parameter, failing on the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.satellites.is_empty() {
            return Err(ConfigError::NoSatellites);
        }

        for (index, satellite) in self.satellites.iter().enumerate() {
            if !(satellite.radius > 0.0 && satellite.radius.is_finite()) {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: satellite.radius,
                });
            }
            if satellite.period == 0.0 || !satellite.period.is_finite() {
                return Err(ConfigError::InvalidPeriod {
                    index,
                    period: satellite.period,
                });
            }
        }

        if !(self.connection_threshold > 0.0 && self.connection_threshold.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "connection_threshold",
                value: self.connection_threshold,
                constraint: "> 0",
            });
        }

        let receiver = &self.receiver;
        if !(receiver.earth_radius > 0.0 && receiver.earth_radius.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "earth_radius",
                value: receiver.earth_radius,
                constraint: "> 0",
            });
        }
        if !(receiver.height_offset >= 0.0 && receiver.height_offset.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "height_offset",
                value: receiver.height_offset,
                constraint: ">= 0",
            });
        }
        if !(-90.0..=90.0).contains(&receiver.lat_deg) {
            return Err(ConfigError::OutOfRange {
                field: "lat_deg",
                value: receiver.lat_deg,
                constraint: "within -90..=90",
            });
        }
        if !receiver.lon_deg.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "lon_deg",
                value: receiver.lon_deg,
                constraint: "finite",
            });
        }

        if self.frames_per_cycle == 0 {
            return Err(ConfigError::OutOfRange {
                field: "frames_per_cycle",
                value: 0.0,
                constraint: "> 0",
            });
        }

        Ok(())
    }
}
