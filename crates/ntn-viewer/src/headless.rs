//! Headless simulation runner.
//!
//! Runs the same frame loop as the viewer without a window and writes one
//! JSON object per frame to stdout. Logs go to stderr.
//!
//! Run with: cargo run -p ntn-viewer --bin ntn-headless -- --cycles 2

#[cfg(target_family = "wasm")]
fn main() {}

#[cfg(not(target_family = "wasm"))]
fn main() -> std::process::ExitCode {
    use std::io::{BufWriter, Write};
    use std::process::ExitCode;

    use ntn_sim::Simulation;
    use ntn_viewer::{launch_params, logging};

    logging::init();

    let params = launch_params::parse();
    let mut simulation = match Simulation::new(&params.config) {
        Ok(simulation) => simulation,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut connected_frames = 0_u64;

    while let Some(frame) = simulation.advance() {
        if frame.status.is_connected() {
            connected_frames += 1;
        }
        let written = serde_json::to_writer(&mut out, &frame)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out));
        if let Err(e) = written {
            tracing::error!("Failed to write frame {}: {e}", frame.frame);
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = out.flush() {
        tracing::error!("Failed to flush output: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        frames = simulation.state().frames_elapsed,
        connected_frames,
        "Simulation complete"
    );

    ExitCode::SUCCESS
}
