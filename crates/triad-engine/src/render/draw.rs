/// One fixed draw command, recorded every frame.
///
/// Topology lives in the pipeline; this only says what to pull from the bound
/// buffers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCall {
    /// `count` vertices starting at `first`, no index buffer.
    Arrays { first: u32, count: u32 },
    /// `count` indices starting at `first` from the bound index buffer.
    Indexed { first: u32, count: u32, base_vertex: i32 },
}

impl DrawCall {
    /// The draw that covers a whole vertex (and optional index) buffer.
    pub fn covering(vertex_count: u32, index_count: Option<u32>) -> Self {
        match index_count {
            Some(count) => DrawCall::Indexed {
                first: 0,
                count,
                base_vertex: 0,
            },
            None => DrawCall::Arrays {
                first: 0,
                count: vertex_count,
            },
        }
    }

    /// Number of vertices the pipeline will assemble.
    pub fn element_count(self) -> u32 {
        match self {
            DrawCall::Arrays { count, .. } | DrawCall::Indexed { count, .. } => count,
        }
    }

    pub fn is_indexed(self) -> bool {
        matches!(self, DrawCall::Indexed { .. })
    }

    /// Issues the draw on `pass`. Buffers and pipeline must already be bound.
    pub fn record(self, pass: &mut wgpu::RenderPass<'_>) {
        match self {
            DrawCall::Arrays { first, count } => pass.draw(first..first + count, 0..1),
            DrawCall::Indexed {
                first,
                count,
                base_vertex,
            } => pass.draw_indexed(first..first + count, base_vertex, 0..1),
        }
    }
}
