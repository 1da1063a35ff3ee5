use anyhow::{Result, bail, ensure};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

// ── vertex layout ─────────────────────────────────────────────────────────

/// A single 3-component clip-space position.
///
/// Layout: attribute slot 0, `Float32x3`, tightly packed (stride 12 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Position3 {
    pub pos: [f32; 3],
}

impl Position3 {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { pos: [x, y, z] }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Position3>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── vertex buffer ─────────────────────────────────────────────────────────

/// Static vertex buffer. Uploaded once, destroyed on drop.
#[derive(Debug)]
pub struct VertexBuffer {
    buffer: wgpu::Buffer,
    count: u32,
    label: String,
}

impl VertexBuffer {
    pub fn new<V: Pod>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Result<Self> {
        ensure!(!vertices.is_empty(), "{label}: vertex list is empty");
        let count = u32::try_from(vertices.len())?;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("{label}: uploaded {count} vertices ({} bytes)", buffer.size());

        Ok(Self {
            buffer,
            count,
            label: label.to_string(),
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        log::debug!("{}: releasing vertex buffer", self.label);
        self.buffer.destroy();
    }
}

// ── index buffer ──────────────────────────────────────────────────────────

/// Integer types usable as indices.
pub trait IndexElement: Pod {
    const FORMAT: wgpu::IndexFormat;

    fn to_u32(self) -> u32;
}

impl IndexElement for u16 {
    const FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

    fn to_u32(self) -> u32 {
        self as u32
    }
}

impl IndexElement for u32 {
    const FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    fn to_u32(self) -> u32 {
        self
    }
}

/// Checks that every index addresses one of `vertex_count` vertices.
pub fn check_indices<I: IndexElement>(indices: &[I], vertex_count: u32) -> Result<()> {
    ensure!(!indices.is_empty(), "index list is empty");
    for (slot, index) in indices.iter().enumerate() {
        let index = index.to_u32();
        if index >= vertex_count {
            bail!("index {index} at slot {slot} is out of bounds for {vertex_count} vertices");
        }
    }
    Ok(())
}

/// Static index buffer. Uploaded once, destroyed on drop.
#[derive(Debug)]
pub struct IndexBuffer {
    buffer: wgpu::Buffer,
    format: wgpu::IndexFormat,
    count: u32,
    label: String,
}

impl IndexBuffer {
    /// Uploads `indices` after checking them against `vertex_count`.
    pub fn new<I: IndexElement>(
        device: &wgpu::Device,
        label: &str,
        indices: &[I],
        vertex_count: u32,
    ) -> Result<Self> {
        check_indices(indices, vertex_count).map_err(|e| e.context(label.to_string()))?;
        let count = u32::try_from(indices.len())?;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!("{label}: uploaded {count} indices ({:?})", I::FORMAT);

        Ok(Self {
            buffer,
            format: I::FORMAT,
            count,
            label: label.to_string(),
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn format(&self) -> wgpu::IndexFormat {
        self.format
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        log::debug!("{}: releasing index buffer", self.label);
        self.buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_layout_is_tightly_packed() {
        let layout = Position3::layout();
        assert_eq!(layout.array_stride, 3 * std::mem::size_of::<f32>() as u64);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);

        let attr = layout.attributes[0];
        assert_eq!(attr.shader_location, 0);
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn positions_cast_to_flat_floats() {
        let verts = [Position3::new(1.0, 2.0, 3.0), Position3::new(4.0, 5.0, 6.0)];
        let flat: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn index_formats() {
        assert_eq!(<u16 as IndexElement>::FORMAT, wgpu::IndexFormat::Uint16);
        assert_eq!(<u32 as IndexElement>::FORMAT, wgpu::IndexFormat::Uint32);
    }

    #[test]
    fn indices_within_bounds_pass() {
        assert!(check_indices(&[0u32, 1, 2], 3).is_ok());
    }

    #[test]
    fn out_of_bounds_index_rejected() {
        let err = check_indices(&[0u16, 1, 3], 3).unwrap_err();
        assert!(err.to_string().contains("index 3 at slot 2"));
    }

    #[test]
    fn empty_index_list_rejected() {
        assert!(check_indices::<u32>(&[], 3).is_err());
    }
}
