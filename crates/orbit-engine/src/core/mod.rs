//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and the
//! demo binaries: a one-time init hook with GPU access, a per-frame context and
//! the fatal-error exit path.

mod app;
mod ctx;
mod exit;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InitCtx, WindowCtx};
pub use exit::{exit_with_error, INIT_FAILURE_EXIT_CODE};
