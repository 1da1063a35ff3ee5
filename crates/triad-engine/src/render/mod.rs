//! GPU rendering helpers.
//!
//! Everything a scene creates here is write-once: built during setup, read by
//! the draw call every frame, released on drop.
//!
//! Convention:
//! - positions are already in clip space (`[-1, 1]`), no transform is applied
//! - every resource owns its wgpu object and releases it in `Drop`

mod ctx;
mod draw;
mod geometry;
mod mesh;
mod shader;

#[cfg(test)]
pub(crate) mod testing;

pub use ctx::RenderCtx;
pub use draw::DrawCall;
pub use geometry::{check_indices, IndexBuffer, IndexElement, Position3, VertexBuffer};
pub use mesh::Mesh;
pub use shader::{ProgramDesc, ShaderProgram, ShaderStage};
