//! Triad engine crate.
//!
//! Owns the window/context lifecycle and the frame loop shared by every demo
//! program. Programs plug in a [`core::Scene`] and the runtime does the rest.

pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
