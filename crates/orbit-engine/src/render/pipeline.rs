use anyhow::Result;

use super::ctx::RenderCtx;
use super::shader::{ShaderProgram, ShaderStage};

/// Color blending applied to fragment output.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendMode {
    /// `src * src.a + dst * (1 - src.a)` on every channel.
    Alpha,
}

impl BlendMode {
    pub fn state(self) -> wgpu::BlendState {
        match self {
            Self::Alpha => {
                let component = wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                };
                wgpu::BlendState {
                    color: component,
                    alpha: component,
                }
            }
        }
    }
}

/// Fixed-function state baked into a pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct RenderState {
    /// Keep the fragment closest to the camera (`Less`).
    pub depth_test: bool,
    pub blend: Option<BlendMode>,
}

impl RenderState {
    pub const DEPTH_TESTED: Self = Self {
        depth_test: true,
        blend: None,
    };

    pub const ALPHA_BLENDED: Self = Self {
        depth_test: false,
        blend: Some(BlendMode::Alpha),
    };
}

/// Depth-stencil state for a pipeline drawn into a pass with `depth_format`.
///
/// A pass that has a depth attachment needs a matching pipeline state even when
/// the pipeline does not test depth; in that case comparisons always pass and
/// nothing is written.
pub(crate) fn depth_stencil_state(
    depth_test: bool,
    depth_format: Option<wgpu::TextureFormat>,
) -> Result<Option<wgpu::DepthStencilState>> {
    let Some(format) = depth_format else {
        anyhow::ensure!(!depth_test, "depth test requested but the surface has no depth attachment");
        return Ok(None);
    };

    let (depth_write_enabled, depth_compare) = if depth_test {
        (true, wgpu::CompareFunction::Less)
    } else {
        (false, wgpu::CompareFunction::Always)
    };

    Ok(Some(wgpu::DepthStencilState {
        format,
        depth_write_enabled,
        depth_compare,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }))
}

/// Render pipeline drawing triangle lists from [`MeshBuffers`](super::MeshBuffers)
/// with one `MVP` bind group.
pub struct MeshPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl MeshPipeline {
    pub fn new(
        ctx: &RenderCtx<'_>,
        label: &str,
        program: &ShaderProgram,
        vertex_layouts: &[wgpu::VertexBufferLayout<'_>],
        mvp_layout: &wgpu::BindGroupLayout,
        state: RenderState,
    ) -> Result<Self> {
        let depth_stencil = depth_stencil_state(state.depth_test, ctx.depth_format)?;

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("{label} pipeline layout")),
                bind_group_layouts: &[mvp_layout],
                immediate_size: 0,
            });

        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &program.vertex,
                entry_point: Some(ShaderStage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: vertex_layouts,
            },

            fragment: Some(wgpu::FragmentState {
                module: &program.fragment,
                entry_point: Some(ShaderStage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: state.blend.map(BlendMode::state),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // No culling: flat geometry is seen from both sides.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil,
            multisample: wgpu::MultisampleState {
                count: ctx.sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },

            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            anyhow::bail!("render pipeline '{label}' is invalid: {err}");
        }

        log::debug!("built pipeline '{label}' ({state:?}, {}x MSAA)", ctx.sample_count);

        Ok(Self { pipeline })
    }

    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTH: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    #[test]
    fn depth_test_uses_less_and_writes() {
        let ds = depth_stencil_state(true, Some(DEPTH)).unwrap().unwrap();
        assert_eq!(ds.depth_compare, wgpu::CompareFunction::Less);
        assert!(ds.depth_write_enabled);
        assert_eq!(ds.format, DEPTH);
    }

    #[test]
    fn depth_attachment_without_test_always_passes() {
        let ds = depth_stencil_state(false, Some(DEPTH)).unwrap().unwrap();
        assert_eq!(ds.depth_compare, wgpu::CompareFunction::Always);
        assert!(!ds.depth_write_enabled);
    }

    #[test]
    fn no_attachment_no_test_is_none() {
        assert!(depth_stencil_state(false, None).unwrap().is_none());
    }

    #[test]
    fn depth_test_without_attachment_is_an_error() {
        let err = depth_stencil_state(true, None).unwrap_err();
        assert!(err.to_string().contains("no depth attachment"));
    }

    #[test]
    fn alpha_blend_factors() {
        let b = BlendMode::Alpha.state();
        assert_eq!(b.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(b.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(b.alpha, b.color);
    }

    #[test]
    fn presets() {
        assert!(RenderState::DEPTH_TESTED.depth_test);
        assert_eq!(RenderState::DEPTH_TESTED.blend, None);
        assert!(!RenderState::ALPHA_BLENDED.depth_test);
        assert_eq!(RenderState::ALPHA_BLENDED.blend, Some(BlendMode::Alpha));
        assert_eq!(RenderState::default(), RenderState { depth_test: false, blend: None });
    }
}
