use anyhow::Result;
use triad_engine::core::Scene;
use triad_engine::render::{DrawCall, RenderCtx};

use super::FlatMesh;
use crate::geometry::TRIANGLE_VERTICES;

/// One orange triangle, drawn from a vertex buffer without indices.
#[derive(Debug)]
pub struct Triangle {
    inner: FlatMesh,
}

impl Triangle {
    /// Every frame draws the three vertices as one triangle.
    pub const DRAW: DrawCall = DrawCall::Arrays { first: 0, count: 3 };

    pub fn draw_call(&self) -> DrawCall {
        self.inner.mesh().draw_call()
    }
}

impl Scene for Triangle {
    fn setup(ctx: &RenderCtx<'_>) -> Result<Self> {
        let inner = FlatMesh::new(ctx, "triangle", &TRIANGLE_VERTICES, None)?;
        let scene = Self { inner };
        debug_assert_eq!(scene.draw_call(), Self::DRAW);
        Ok(scene)
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.inner.draw(pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing;

    #[test]
    fn draw_covers_the_vertex_list() {
        assert_eq!(DrawCall::covering(TRIANGLE_VERTICES.len() as u32, None), Triangle::DRAW);
        assert_eq!(Triangle::DRAW.element_count(), 3);
        assert!(!Triangle::DRAW.is_indexed());
    }

    #[test]
    fn live_scene_draws_three_vertices() {
        let (device, _queue) = testing::noop_device();
        let scene = Triangle::setup(&testing::render_ctx(&device)).unwrap();

        assert_eq!(scene.draw_call(), Triangle::DRAW);
        assert_eq!(scene.inner.mesh().vertex_count(), 3);
        assert_eq!(scene.inner.mesh().index_count(), None);
    }
}
