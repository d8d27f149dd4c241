use crate::device::Gpu;

/// Renderer-facing context (device/queue + target formats).
///
/// Pipelines built from this context match the attachments of the current
/// surface: color format, MSAA sample count and optional depth format.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub sample_count: u32,
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn from_gpu(gpu: &'a Gpu<'_>) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            sample_count: gpu.sample_count(),
            depth_format: gpu.depth_format(),
        }
    }
}
