use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{AppControl, FrameCtx, FrameOutcome, Scene};
use crate::device::{Gpu, GpuInit};
use crate::render::RenderCtx;
use crate::time::FrameClock;

use super::{FrameLoop, RuntimeConfig, StartupError, StartupStage};

/// Frames between periodic progress lines at `debug` level.
const LOG_EVERY_FRAMES: u64 = 600;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, sets up `S`, runs the frame loop until the window is
    /// closed, then tears everything down.
    ///
    /// Teardown order: scene resources, then the rendering context, then the
    /// window, then the event loop. A failure to create the window, its
    /// context, or the scene comes back as a [`StartupError`].
    pub fn run<S: Scene>(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new()
            .map_err(|e| StartupError::new(StartupStage::EventLoop, e))?;

        let mut state = AppState::<S>::new(config, gpu_init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        log::debug!("windowing library shut down");
        state.finish()
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// The scene and the window it renders into. The scene is always released
/// first, whether through [`Session::teardown`] or on drop.
struct Session<S, W> {
    scene: Option<S>,
    window: Option<W>,
}

impl<S, W> Session<S, W> {
    fn empty() -> Self {
        Self {
            scene: None,
            window: None,
        }
    }

    fn teardown(&mut self) {
        if let Some(scene) = self.scene.take() {
            log::debug!("releasing scene resources");
            drop(scene);
        }
        if let Some(window) = self.window.take() {
            log::debug!("destroying window");
            drop(window);
        }
    }
}

impl<S, W> Drop for Session<S, W> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Runs `S::setup`, tagging a failure as a scene startup error.
fn setup_scene<S: Scene>(ctx: &RenderCtx<'_>) -> std::result::Result<S, StartupError> {
    S::setup(ctx).map_err(|e| StartupError::new(StartupStage::Scene, e))
}

struct AppState<S: Scene> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    session: Session<S, WindowEntry>,
    frame_loop: FrameLoop,
    failure: Option<StartupError>,
}

impl<S: Scene> AppState<S> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            session: Session::empty(),
            frame_loop: FrameLoop::new(),
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.request_exit() {
            log::debug!(
                "exit requested after {} frames",
                self.frame_loop.frames_presented()
            );
        }
        event_loop.exit();
    }

    fn startup(&mut self, event_loop: &ActiveEventLoop) -> std::result::Result<(), StartupError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| StartupError::new(StartupStage::Window, e))?;
        log::debug!("window created: {:?}", window.id());

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .map_err(|e| StartupError::new(StartupStage::Context, e))?;

        let scene = entry.with_gpu(|gpu| setup_scene::<S>(&gpu.render_ctx()))?;
        log::debug!("scene ready");

        entry.with_window(|w| w.request_redraw());

        self.session.scene = Some(scene);
        self.session.window = Some(entry);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if !self.frame_loop.begin_frame() {
            return;
        }

        let session = &mut self.session;
        let (Some(entry), Some(scene)) = (session.window.as_mut(), session.scene.as_ref()) else {
            return;
        };
        let clear = self.config.clear_color;

        let outcome = entry.with_mut(|fields| {
            let time = fields.clock.tick();
            if time.frame_index % LOG_EVERY_FRAMES == 0 {
                log::debug!("frame {} (dt {:.4}s)", time.frame_index, time.dt);
            }

            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                time,
            };
            ctx.render(clear, |pass| scene.draw(pass))
        });

        if outcome == FrameOutcome::Presented {
            self.frame_loop.record_present();
        }
        if outcome.control() == AppControl::Exit {
            log::error!("surface lost beyond recovery; leaving the frame loop");
            self.request_exit(event_loop);
        }
    }

    fn finish(mut self) -> Result<()> {
        self.session.teardown();
        match self.failure.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl<S: Scene> ApplicationHandler for AppState<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.window.is_some() || !self.frame_loop.is_running() {
            return;
        }

        if let Err(e) = self.startup(event_loop) {
            log::error!("{e}");
            self.failure = Some(e);
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.frame_loop.is_running() {
            event_loop.exit();
            return;
        }

        // All pending events of this iteration have been dispatched.
        self.frame_loop.record_poll();

        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = &self.session.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.frame_loop.is_running() {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.session.window.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if let Some(scene) = self.session.scene.as_mut() {
            if scene.on_window_event(&event) == AppControl::Exit {
                self.request_exit(event_loop);
                return;
            }
        }

        match &event {
            WindowEvent::CloseRequested => self.request_exit(event_loop),

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.session.teardown();
    }
}
