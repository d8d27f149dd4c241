//! Orbit engine crate.
//!
//! This crate owns the platform + GPU runtime pieces shared by the demo binaries:
//! window loop, device/surface, keyboard input, frame pacing, the orbiting camera
//! and the colored-mesh render path.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod camera;
pub mod render;
