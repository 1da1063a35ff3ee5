use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::time::FrameTime;

use super::AppControl;

/// Per-frame context built by the runtime for each redraw.
///
/// Lifetimes:
/// - `'a` is the duration of the redraw
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

/// Outcome of [`FrameCtx::render`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Presented,
    Skipped,
    Fatal,
}

impl FrameOutcome {
    pub fn control(self) -> AppControl {
        match self {
            FrameOutcome::Fatal => AppControl::Exit,
            FrameOutcome::Presented | FrameOutcome::Skipped => AppControl::Continue,
        }
    }
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, lets `draw` record into the same pass
    /// with the viewport covering the whole surface, then presents.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> FrameOutcome
    where
        F: FnOnce(&mut wgpu::RenderPass<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            // Minimized; nothing to present into.
            return FrameOutcome::Skipped;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::warn!("frame {} not acquired: {err}", self.time.frame_index);
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => FrameOutcome::Fatal,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        FrameOutcome::Skipped
                    }
                };
            }
        };

        // The pass borrows the encoder; it must end before submit() takes the frame.
        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("triad frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_viewport(0.0, 0.0, size.width as f32, size.height as f32, 0.0, 1.0);
            draw(&mut rpass);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        FrameOutcome::Presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_frames_stop_the_loop() {
        assert_eq!(FrameOutcome::Presented.control(), AppControl::Continue);
        assert_eq!(FrameOutcome::Skipped.control(), AppControl::Continue);
        assert_eq!(FrameOutcome::Fatal.control(), AppControl::Exit);
    }
}
