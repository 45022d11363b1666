//! 3D viewer for the NTN orbit and connectivity simulation using Bevy.
//!
//! This library exposes launch parameter parsing and tracing setup so the
//! headless runner shares them with the viewer.

pub mod launch_params;
pub mod logging;
