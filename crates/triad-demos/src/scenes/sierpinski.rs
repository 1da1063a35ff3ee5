use anyhow::Result;
use triad_engine::core::Scene;
use triad_engine::render::{DrawCall, IndexElement, RenderCtx};

use super::FlatMesh;
use crate::geometry::{SIERPINSKI_INDICES, SIERPINSKI_VERTICES};

/// First Sierpinski step: three corner triangles sharing six vertices
/// through an index buffer.
#[derive(Debug)]
pub struct Sierpinski {
    inner: FlatMesh,
}

impl Sierpinski {
    /// Every frame draws the nine indices as three triangles.
    pub const DRAW: DrawCall = DrawCall::Indexed {
        first: 0,
        count: 9,
        base_vertex: 0,
    };

    pub const INDEX_FORMAT: wgpu::IndexFormat = <u32 as IndexElement>::FORMAT;

    pub fn draw_call(&self) -> DrawCall {
        self.inner.mesh().draw_call()
    }
}

impl Scene for Sierpinski {
    fn setup(ctx: &RenderCtx<'_>) -> Result<Self> {
        let inner = FlatMesh::new(
            ctx,
            "sierpinski",
            &SIERPINSKI_VERTICES,
            Some(&SIERPINSKI_INDICES),
        )?;
        let scene = Self { inner };
        debug_assert_eq!(scene.draw_call(), Self::DRAW);
        Ok(scene)
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.inner.draw(pass);
    }
}
