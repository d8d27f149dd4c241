use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::{FrameCtx, InitCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo binaries.
///
/// Call order: `on_init` once after the window and GPU exist, `on_frame` once per
/// iteration of the render loop, `on_exit` once before the GPU and window are dropped.
pub trait App {
    /// Creates GPU resources. An error aborts startup.
    fn on_init(&mut self, ctx: &InitCtx<'_, '_>) -> Result<()>;

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Releases application-owned GPU resources.
    fn on_exit(&mut self) {}

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }
}
