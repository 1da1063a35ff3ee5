use anyhow::Result;
use winit::event::WindowEvent;

use crate::render::RenderCtx;

/// Control directive returned by scene callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// The part of a program that varies: what to build once, what to draw each
/// frame.
///
/// The runtime calls `setup` after the rendering context exists and before
/// the first frame, and drops the scene after the loop exits but before the
/// window and context go away.
pub trait Scene: Sized + 'static {
    /// Creates GPU resources. Called exactly once.
    fn setup(ctx: &RenderCtx<'_>) -> Result<Self>;

    /// Records this frame's draw into a pass that has already been cleared.
    fn draw(&self, pass: &mut wgpu::RenderPass<'_>);

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }
}

/// A scene with no pipeline: frames are cleared and presented.
impl Scene for () {
    fn setup(_ctx: &RenderCtx<'_>) -> Result<Self> {
        Ok(())
    }

    fn draw(&self, _pass: &mut wgpu::RenderPass<'_>) {}
}
