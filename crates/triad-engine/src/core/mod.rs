//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the programs built
//! on it: a [`Scene`] is set up once and drawn every frame.

mod ctx;
mod scene;

pub use ctx::{FrameCtx, FrameOutcome};
pub use scene::{AppControl, Scene};
