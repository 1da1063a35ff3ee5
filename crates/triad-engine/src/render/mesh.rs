use anyhow::Result;
use bytemuck::Pod;

use super::{DrawCall, IndexBuffer, IndexElement, VertexBuffer};

/// Static geometry plus the draw call that covers it.
///
/// Fields drop in declaration order: the index buffer (created last) is
/// released before the vertex buffer.
#[derive(Debug)]
pub struct Mesh {
    indices: Option<IndexBuffer>,
    vertices: VertexBuffer,
}

impl Mesh {
    /// Non-indexed mesh; draws every vertex in order.
    pub fn new<V: Pod>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Result<Self> {
        let vertices = VertexBuffer::new(device, &format!("{label} vbo"), vertices)?;
        Ok(Self {
            indices: None,
            vertices,
        })
    }

    /// Indexed mesh; every index must address one of `vertices`.
    pub fn indexed<V: Pod, I: IndexElement>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        indices: &[I],
    ) -> Result<Self> {
        let vertices = VertexBuffer::new(device, &format!("{label} vbo"), vertices)?;
        let indices = IndexBuffer::new(device, &format!("{label} ibo"), indices, vertices.count())?;
        Ok(Self {
            indices: Some(indices),
            vertices,
        })
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.count()
    }

    pub fn index_count(&self) -> Option<u32> {
        self.indices.as_ref().map(IndexBuffer::count)
    }

    pub fn draw_call(&self) -> DrawCall {
        DrawCall::covering(self.vertex_count(), self.index_count())
    }

    /// Binds the buffers at slot 0 and issues the draw.
    pub fn record(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        if let Some(indices) = &self.indices {
            pass.set_index_buffer(indices.buffer().slice(..), indices.format());
        }
        self.draw_call().record(pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{testing, Position3};

    const CORNERS: [Position3; 3] = [
        Position3::new(-0.5, -0.5, 0.0),
        Position3::new(0.5, -0.5, 0.0),
        Position3::new(0.0, 0.5, 0.0),
    ];

    #[test]
    fn plain_mesh_draws_every_vertex() {
        let (device, _queue) = testing::noop_device();
        let mesh = Mesh::new(&device, "tri", &CORNERS).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), None);
        assert_eq!(mesh.draw_call(), DrawCall::Arrays { first: 0, count: 3 });
    }

    #[test]
    fn indexed_mesh_draws_every_index() {
        let (device, _queue) = testing::noop_device();
        let indices: [u32; 6] = [0, 1, 2, 2, 1, 0];
        let mesh = Mesh::indexed(&device, "quad", &CORNERS, &indices).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), Some(6));
        assert_eq!(
            mesh.draw_call(),
            DrawCall::Indexed {
                first: 0,
                count: 6,
                base_vertex: 0
            }
        );
    }

    #[test]
    fn indexed_mesh_rejects_stray_index() {
        let (device, _queue) = testing::noop_device();
        let indices: [u16; 3] = [0, 1, 3];
        assert!(Mesh::indexed(&device, "bad", &CORNERS, &indices).is_err());
    }

    #[test]
    fn index_buffer_reports_element_format() {
        let (device, _queue) = testing::noop_device();

        let wide = IndexBuffer::new(&device, "wide", &[0u32, 1, 2], 3).unwrap();
        assert_eq!(wide.format(), wgpu::IndexFormat::Uint32);
        assert_eq!(wide.count(), 3);

        let narrow = IndexBuffer::new(&device, "narrow", &[2u16, 1, 0], 3).unwrap();
        assert_eq!(narrow.format(), wgpu::IndexFormat::Uint16);
    }
}
