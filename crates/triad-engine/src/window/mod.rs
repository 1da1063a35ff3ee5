//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single window, wires them to the GPU
//! layer, and drives a [`Scene`](crate::core::Scene) one frame at a time.

mod config;
mod error;
mod frame_loop;
mod runtime;

pub use config::RuntimeConfig;
pub use error::{
    exit_status, StartupError, StartupStage, EXIT_FAILURE, EXIT_STARTUP_FAILURE, EXIT_SUCCESS,
};
pub use frame_loop::{FrameLoop, LoopState};
pub use runtime::Runtime;
