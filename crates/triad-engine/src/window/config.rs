use winit::dpi::PhysicalSize;

use crate::paint::Color;

/// Window + frame configuration. Built once, passed by value into
/// [`Runtime::run`](super::Runtime::run), never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub title: String,
    /// Inner size in physical pixels.
    pub size: PhysicalSize<u32>,
    /// Color every frame is cleared to.
    pub clear_color: Color,
    pub resizable: bool,
}

impl RuntimeConfig {
    pub const DEFAULT_SIZE: PhysicalSize<u32> = PhysicalSize::new(800, 800);
    pub const DEFAULT_CLEAR: Color = Color::opaque(0.07, 0.13, 0.17);

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "triad".to_string(),
            size: Self::DEFAULT_SIZE,
            clear_color: Self::DEFAULT_CLEAR,
            resizable: true,
        }
    }
}
