//! Color values shared between the runtime and scenes.

mod color;

pub use color::Color;
