//! Launch parameter parsing for the viewer and the headless runner.
//!
//! On native, parameters are parsed from command-line arguments using clap.
//! On WASM, defaults are used (CLI argument parsing is not available).

use bevy::prelude::*;
use ntn_sim::SimulationConfig;
use ntn_sim::config::{
    DEFAULT_CONNECTION_THRESHOLD, DEFAULT_FRAMES_PER_CYCLE, DEFAULT_MAX_CYCLES,
    DEFAULT_RECEIVER_LAT, DEFAULT_RECEIVER_LON,
};

/// Default delay between simulation frames in milliseconds.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 500;
/// Default camera azimuth in degrees.
pub const DEFAULT_AZIMUTH: f32 = 45.0;

/// Launch parameters shared by both binaries.
#[derive(Resource, Debug, Clone)]
pub struct LaunchParams {
    /// Scenario configuration; validated when the simulation is built.
    pub config: SimulationConfig,
    /// Wall-clock delay between simulation frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Initial camera azimuth in degrees.
    pub azimuth_deg: f32,
    /// Equirectangular Earth image, relative to the asset folder.
    pub earth_texture: Option<String>,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            azimuth_deg: DEFAULT_AZIMUTH,
            earth_texture: None,
        }
    }
}

#[cfg(not(target_family = "wasm"))]
mod native {
    use clap::Parser;

    use super::*;

    /// Parse an azimuth in degrees, rejecting values outside `0..=360`.
    fn parse_azimuth(s: &str) -> Result<f32, String> {
        let value = s
            .parse::<f32>()
            .map_err(|e| format!("invalid azimuth: {e}"))?;
        if !(0.0..=360.0).contains(&value) {
            return Err(format!("azimuth out of range: {value}"));
        }
        Ok(value)
    }

    #[derive(Parser)]
    #[command(about = "Orbit and connectivity viewer for a simplified NTN scenario")]
    struct CliArgs {
        /// Receiver latitude in degrees; also the tilt of every orbital plane.
        #[arg(long, default_value_t = DEFAULT_RECEIVER_LAT, allow_hyphen_values = true)]
        lat: f64,

        /// Receiver longitude in degrees.
        #[arg(long, default_value_t = DEFAULT_RECEIVER_LON, allow_hyphen_values = true)]
        lon: f64,

        /// Connection distance threshold in Earth radii.
        #[arg(long, default_value_t = DEFAULT_CONNECTION_THRESHOLD)]
        threshold: f64,

        /// Number of cycles to run before stopping.
        #[arg(long, default_value_t = DEFAULT_MAX_CYCLES)]
        cycles: u32,

        /// Frames per cycle.
        #[arg(long, default_value_t = DEFAULT_FRAMES_PER_CYCLE)]
        frames_per_cycle: u32,

        /// Delay between simulation frames in milliseconds (viewer only).
        #[arg(long, default_value_t = DEFAULT_FRAME_INTERVAL_MS)]
        frame_interval_ms: u64,

        /// Initial camera azimuth in degrees (viewer only).
        #[arg(long, default_value_t = DEFAULT_AZIMUTH, value_parser = parse_azimuth)]
        azimuth: f32,

        /// Equirectangular Earth image under the asset folder (viewer only).
        #[arg(long)]
        earth_texture: Option<String>,
    }

    pub fn parse() -> LaunchParams {
        let args = CliArgs::parse();
        let mut config = SimulationConfig {
            connection_threshold: args.threshold,
            max_cycles: args.cycles,
            frames_per_cycle: args.frames_per_cycle,
            ..SimulationConfig::default()
        };
        config.receiver.lat_deg = args.lat;
        config.receiver.lon_deg = args.lon;

        LaunchParams {
            config,
            frame_interval_ms: args.frame_interval_ms,
            azimuth_deg: args.azimuth,
            earth_texture: args.earth_texture,
        }
    }

}

/// Parse launch parameters from CLI args (native) or use defaults (WASM).
pub fn parse() -> LaunchParams {
    #[cfg(not(target_family = "wasm"))]
    {
        native::parse()
    }
    #[cfg(target_family = "wasm")]
    {
        LaunchParams::default()
    }
}
