//! Time-stepping driver for the simulation.
//!
//! Advances the simulation one frame per timer tick until the frame budget is
//! spent. Rendering systems read the latest snapshot from [`SimulationDriver`].

use std::time::Duration;

use bevy::prelude::*;
use ntn_sim::{FrameSnapshot, Simulation};

/// Plugin that advances the simulation on a fixed wall-clock interval.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, tick_simulation);
    }
}

/// The running simulation and its pacing state.
#[derive(Resource)]
pub struct SimulationDriver {
    pub simulation: Simulation,
    /// Snapshot from the most recent frame, if any has run.
    pub latest: Option<FrameSnapshot>,
    /// When true, the timer does not advance.
    pub paused: bool,
    /// Earth radius in scene units.
    pub earth_radius: f64,
    /// Untouched copy used to restart the run.
    initial: Simulation,
    timer: Timer,
}

impl SimulationDriver {
    pub fn new(simulation: Simulation, earth_radius: f64, frame_interval: Duration) -> Self {
        Self {
            initial: simulation.clone(),
            simulation,
            latest: None,
            paused: false,
            earth_radius,
            timer: Timer::new(frame_interval, TimerMode::Repeating),
        }
    }

    /// Discard all trails and start again from frame 0.
    pub fn restart(&mut self) {
        self.simulation = self.initial.clone();
        self.latest = None;
        self.timer.reset();
        tracing::info!("Simulation restarted");
    }

    /// Number of frames run so far.
    pub fn frames_elapsed(&self) -> u64 {
        self.simulation.state().frames_elapsed
    }
}

/// Advance the simulation by however many frames the timer allows.
fn tick_simulation(time: Res<Time>, mut driver: ResMut<SimulationDriver>) {
    if driver.paused || driver.simulation.is_finished() {
        return;
    }

    driver.timer.tick(time.delta());
    for _ in 0..driver.timer.times_finished_this_tick() {
        let Some(frame) = driver.simulation.advance() else {
            break;
        };
        driver.latest = Some(frame);
    }

    if driver.simulation.is_finished() {
        tracing::info!(
            frames = driver.frames_elapsed(),
            "Frame budget reached, simulation stopped"
        );
    }
}
