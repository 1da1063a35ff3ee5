use std::fmt::Write as _;

use anyhow::{Result, bail};

use super::RenderCtx;

/// One shader stage: WGSL source + entry point.
#[derive(Debug, Copy, Clone)]
pub struct ShaderStage<'a> {
    pub label: &'a str,
    pub source: &'a str,
    pub entry_point: &'a str,
}

/// Everything needed to link a vertex + fragment pair into a program.
#[derive(Debug, Clone)]
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex: ShaderStage<'a>,
    pub fragment: ShaderStage<'a>,
    pub vertex_layouts: &'a [wgpu::VertexBufferLayout<'a>],
    pub topology: wgpu::PrimitiveTopology,
}

/// A linked shader program (render pipeline).
///
/// Stage modules are compiled, checked for errors, linked, and released
/// before `new` returns; only the pipeline is kept.
#[derive(Debug)]
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    label: String,
}

impl ShaderProgram {
    pub fn new(ctx: &RenderCtx<'_>, desc: &ProgramDesc<'_>) -> Result<Self> {
        let vs = compile_stage(ctx.device, desc.vertex)?;
        let fs = compile_stage(ctx.device, desc.fragment)?;

        // Link errors go to the device's uncaptured-error handler unless a
        // scope catches them.
        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(desc.label),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(desc.vertex.entry_point),
                compilation_options: Default::default(),
                buffers: desc.vertex_layouts,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(desc.fragment.entry_point),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            bail!("{}: linking failed: {err}", desc.label);
        }

        log::debug!(
            "{}: linked ({} + {}), releasing stage modules",
            desc.label,
            desc.vertex.label,
            desc.fragment.label
        );
        drop(vs);
        drop(fs);

        Ok(Self {
            pipeline,
            label: desc.label.to_string(),
        })
    }

    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        log::debug!("{}: releasing program", self.label);
    }
}

fn compile_stage(device: &wgpu::Device, stage: ShaderStage<'_>) -> Result<wgpu::ShaderModule> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.label),
        source: wgpu::ShaderSource::Wgsl(stage.source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    let scoped = pollster::block_on(scope.pop());
    let diagnostics: Vec<Diagnostic<'_>> = info.messages.iter().map(Diagnostic::from).collect();

    // Located diagnostics first; the scoped error is the fallback when the
    // compiler reported nothing usable.
    let errors = format_errors(stage.label, &diagnostics);
    if !errors.is_empty() {
        bail!("shader compilation failed:\n{errors}");
    }
    if let Some(err) = scoped {
        bail!("shader compilation failed:\n{}: {err}", stage.label);
    }

    for d in &diagnostics {
        log::warn!("{}: {}", stage.label, d.message);
    }
    Ok(module)
}

/// Compiler message reduced to what the error report needs.
#[derive(Debug, Copy, Clone)]
struct Diagnostic<'m> {
    message: &'m str,
    is_error: bool,
    /// `(line, column)`, both 1-based.
    location: Option<(u32, u32)>,
}

impl<'m> From<&'m wgpu::CompilationMessage> for Diagnostic<'m> {
    fn from(msg: &'m wgpu::CompilationMessage) -> Self {
        Self {
            message: &msg.message,
            is_error: msg.message_type == wgpu::CompilationMessageType::Error,
            location: msg.location.as_ref().map(|l| (l.line_number, l.line_position)),
        }
    }
}

/// Renders every error as `label:line:col: message`, one per line.
fn format_errors(label: &str, diagnostics: &[Diagnostic<'_>]) -> String {
    let mut out = String::new();
    for d in diagnostics.iter().filter(|d| d.is_error) {
        let _ = match d.location {
            Some((line, col)) => writeln!(out, "{label}:{line}:{col}: {}", d.message),
            None => writeln!(out, "{label}: {}", d.message),
        };
    }
    out
}
