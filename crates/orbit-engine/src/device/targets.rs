/// Depth format used for the optional depth attachment.
///
/// `Depth32Float` is universally supported and renderable with 4x MSAA.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Attachments rendered into before the surface texture.
///
/// Both are sized to the surface and recreated on resize.
pub(crate) struct RenderTargets {
    /// Multisampled color target resolved into the surface texture (`sample_count > 1`).
    pub msaa: Option<wgpu::TextureView>,
    /// Depth attachment with the same sample count as the color target.
    pub depth: Option<wgpu::TextureView>,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
        depth: bool,
    ) -> Self {
        let (w, h) = (config.width, config.height);

        let msaa = (sample_count > 1).then(|| {
            create_attachment(device, "orbit msaa color", config.format, w, h, sample_count)
        });
        let depth = depth
            .then(|| create_attachment(device, "orbit depth", DEPTH_FORMAT, w, h, sample_count));

        Self { msaa, depth }
    }
}

fn create_attachment(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    sample_count: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
