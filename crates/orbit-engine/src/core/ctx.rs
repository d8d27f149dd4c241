use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState, Key};
use crate::render::{Color, RenderCtx};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

/// Context passed to `core::App::on_init`.
pub struct InitCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu:    &'a Gpu<'w>,
}

impl<'a, 'w> InitCtx<'a, 'w> {
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::from_gpu(self.gpu)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:       WindowCtx<'a>,
    pub gpu:          &'a mut Gpu<'w>,
    pub input:        &'a InputState,
    pub input_frame:  &'a InputFrame,
    pub time:         FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// True when `key` is held or was tapped since the previous frame.
    pub fn key_hit(&self, key: Key) -> bool {
        self.input.key_hit(self.input_frame, key)
    }

    /// The standard quit gesture: Escape.
    pub fn quit_requested(&self) -> bool {
        self.key_hit(Key::Escape)
    }

    /// Clears color (and depth, when the surface has it), calls `draw` inside the
    /// render pass, then presents the frame.
    ///
    /// With MSAA the pass renders into the multisampled target and resolves into
    /// the surface texture.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut wgpu::RenderPass<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                log::debug!("surface error: {action:?}");
                if action == SurfaceErrorAction::Fatal {
                    log::error!("surface is unusable; stopping");
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // Pass is dropped before the encoder is moved into submit().
        {
            let gpu: &Gpu<'w> = &*self.gpu;

            let (view, resolve_target, store) = match gpu.msaa_view() {
                Some(msaa) => (msaa, Some(&frame.view), wgpu::StoreOp::Discard),
                None => (&frame.view, None, wgpu::StoreOp::Store),
            };

            let depth_stencil_attachment =
                gpu.depth_view()
                    .map(|view| wgpu::RenderPassDepthStencilAttachment {
                        view,
                        depth_ops: Some(wgpu::Operations {
                            load:  wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Discard,
                        }),
                        stencil_ops: None,
                    });

            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orbit frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment,
                timestamp_writes:    None,
                occlusion_query_set: None,
                multiview_mask:      None,
            });

            let rctx = RenderCtx::from_gpu(gpu);
            draw(&rctx, &mut rpass);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
