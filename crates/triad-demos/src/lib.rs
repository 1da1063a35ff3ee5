//! Demo programs built on `triad-engine`.
//!
//! Each binary in `src/bin` picks a [`Scene`] and hands it to [`run`]; the
//! window/context/loop shell is shared.

use std::process::ExitCode;

use triad_engine::core::Scene;
use triad_engine::device::GpuInit;
use triad_engine::logging::{init_logging, LoggingConfig};
use triad_engine::window::{exit_status, Runtime, RuntimeConfig};

pub mod geometry;
pub mod scenes;

/// Window configuration shared by every demo.
pub fn runtime_config(title: &str) -> RuntimeConfig {
    RuntimeConfig::titled(title)
}

/// GPU request shared by every demo.
///
/// Colors are written unconverted (no sRGB surface), matching a plain
/// default framebuffer.
pub fn gpu_init() -> GpuInit {
    GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
}

/// Runs `S` in a fresh window and returns the process status.
pub fn run<S: Scene>(title: &str) -> ExitCode {
    init_logging(LoggingConfig::default());
    log::info!("starting {title}");

    let result = Runtime::run::<S>(runtime_config(title), gpu_init());
    if let Err(e) = &result {
        log::error!("{e:#}");
        eprintln!("{title}: {e:#}");
    }

    ExitCode::from(exit_status(&result))
}
