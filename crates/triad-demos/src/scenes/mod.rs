//! Scenes plugged into the runtime by the demo binaries.
//!
//! The blank-window demo uses the unit scene `()` from the engine.

mod sierpinski;
mod triangle;

#[cfg(test)]
mod testing;

pub use sierpinski::Sierpinski;
pub use triangle::Triangle;

use anyhow::Result;
use triad_engine::render::{Mesh, Position3, ProgramDesc, RenderCtx, ShaderProgram, ShaderStage};

const POSITION_WGSL: &str = include_str!("../shaders/position.wgsl");
const FLAT_COLOR_WGSL: &str = include_str!("../shaders/flat_color.wgsl");

/// Topology every demo draws with.
pub const TOPOLOGY: wgpu::PrimitiveTopology = wgpu::PrimitiveTopology::TriangleList;

/// Flat-colored static mesh: one program, one mesh, one draw.
///
/// `mesh` is declared first so it drops before `program`, the reverse of the
/// order they are created in.
#[derive(Debug)]
pub struct FlatMesh {
    mesh: Mesh,
    program: ShaderProgram,
}

impl FlatMesh {
    pub fn new(
        ctx: &RenderCtx<'_>,
        label: &str,
        vertices: &[Position3],
        indices: Option<&[u32]>,
    ) -> Result<Self> {
        let program = flat_color_program(ctx, label)?;
        let mesh = match indices {
            Some(indices) => Mesh::indexed(ctx.device, label, vertices, indices)?,
            None => Mesh::new(ctx.device, label, vertices)?,
        };
        Ok(Self { mesh, program })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.program.bind(pass);
        self.mesh.record(pass);
    }
}

fn flat_color_program(ctx: &RenderCtx<'_>, label: &str) -> Result<ShaderProgram> {
    let layouts = [Position3::layout()];
    ShaderProgram::new(
        ctx,
        &ProgramDesc {
            label,
            vertex: ShaderStage {
                label: "position.wgsl",
                source: POSITION_WGSL,
                entry_point: "vs_main",
            },
            fragment: ShaderStage {
                label: "flat_color.wgsl",
                source: FLAT_COLOR_WGSL,
                entry_point: "fs_main",
            },
            vertex_layouts: &layouts,
            topology: TOPOLOGY,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORNERS: [Position3; 3] = [
        Position3::new(-0.5, -0.5, 0.0),
        Position3::new(0.5, -0.5, 0.0),
        Position3::new(0.0, 0.5, 0.0),
    ];

    #[test]
    fn shaders_declare_their_entry_points() {
        assert!(POSITION_WGSL.contains("fn vs_main"));
        assert!(POSITION_WGSL.contains("@location(0) pos: vec3<f32>"));
        assert!(FLAT_COLOR_WGSL.contains("fn fs_main"));
    }

    #[test]
    fn vertex_shader_sets_w_to_one() {
        assert!(POSITION_WGSL.contains("vec4<f32>(pos.x, pos.y, pos.z, 1.0)"));
    }

    #[test]
    fn fragment_color_is_opaque_orange() {
        assert!(FLAT_COLOR_WGSL.contains("vec4<f32>(1.0, 0.5, 0.2, 1.0)"));
    }

    #[test]
    fn flat_mesh_releases_buffers_then_program() {
        testing::capture_logs();
        let (device, _queue) = testing::noop_device();
        let ctx = testing::render_ctx(&device);

        let scene = FlatMesh::new(&ctx, "teardown-order", &CORNERS, Some(&[0, 1, 2][..])).unwrap();
        assert!(scene.mesh().index_count().is_some());
        drop(scene);

        let released: Vec<String> = testing::captured()
            .into_iter()
            .filter(|line| line.starts_with("teardown-order") && line.contains(": releasing "))
            .collect();
        assert_eq!(
            released,
            [
                "teardown-order ibo: releasing index buffer",
                "teardown-order vbo: releasing vertex buffer",
                "teardown-order: releasing program",
            ]
        );
    }
}
