//! Time subsystem.
//!
//! Provides frame timing utilities without coupling to the runtime:
//! - one `FrameClock` per window, `tick()` once per presented frame
//! - one `FramePacer` per loop, `pace()` at the start of each iteration

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
