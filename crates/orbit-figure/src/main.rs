//! Depth-tested, vertex-colored bi-pyramid seen from a camera on an elliptical orbit.
//!
//! Escape or closing the window quits.

mod app;
mod geometry;

use anyhow::Result;
use winit::dpi::LogicalSize;

use orbit_engine::core::exit_with_error;
use orbit_engine::device::GpuInit;
use orbit_engine::logging::{init_logging, LoggingConfig};
use orbit_engine::time::FramePacer;
use orbit_engine::window::{Runtime, RuntimeConfig};

use app::FigureApp;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        exit_with_error(&err);
    }
}

fn run() -> Result<()> {
    let config = RuntimeConfig {
        title: "Tutorial 04 - Colored Cube".to_string(),
        initial_size: LogicalSize::new(1024.0, 768.0),
        resizable: false,
        pacer: FramePacer::from_millis(15),
    };

    Runtime::run(config, GpuInit::with_depth(), FigureApp::new())
}
