//! Two alpha-blended triangles, each drawn with its own shader program, seen
//! from a swinging camera.

mod app;
mod geometry;

use anyhow::Result;
use winit::dpi::LogicalSize;

use orbit_engine::core::exit_with_error;
use orbit_engine::device::GpuInit;
use orbit_engine::logging::{init_logging, LoggingConfig};
use orbit_engine::time::FramePacer;
use orbit_engine::window::{Runtime, RuntimeConfig};

use app::TrianglesApp;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        exit_with_error(&err);
    }
}

fn run() -> Result<()> {
    let config = RuntimeConfig {
        title: "Triangles".to_string(),
        initial_size: LogicalSize::new(1024.0, 512.0),
        resizable: false,
        pacer: FramePacer::from_millis(20),
    };

    Runtime::run(config, GpuInit::default(), TrianglesApp::new())
}
