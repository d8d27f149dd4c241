use std::fmt;

use wgpu::util::DeviceExt;

/// Shader location of the position stream.
pub const POSITION_LOCATION: u32 = 0;

/// Shader location of the color stream.
pub const COLOR_LOCATION: u32 = 1;

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![POSITION_LOCATION => Float32x3];

const COLOR_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![COLOR_LOCATION => Float32x3];

/// One tightly packed `[f32; 3]` stream per buffer.
fn stream_layout(attributes: &'static [wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

/// Rejected vertex data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// No positions were supplied.
    Empty,
    /// The color stream does not have one entry per position.
    ColorCountMismatch { positions: usize, colors: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("mesh has no vertices"),
            Self::ColorCountMismatch { positions, colors } => write!(
                f,
                "mesh has {positions} positions but {colors} colors"
            ),
        }
    }
}

impl std::error::Error for MeshError {}

/// CPU-side vertex streams, borrowed from static arrays.
#[derive(Debug, Copy, Clone)]
pub struct MeshData<'a> {
    pub positions: &'a [[f32; 3]],
    pub colors: Option<&'a [[f32; 3]]>,
}

impl<'a> MeshData<'a> {
    pub fn new(positions: &'a [[f32; 3]]) -> Self {
        Self {
            positions,
            colors: None,
        }
    }

    pub fn with_colors(mut self, colors: &'a [[f32; 3]]) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Checks the streams and returns the vertex count.
    pub fn validate(&self) -> Result<u32, MeshError> {
        if self.positions.is_empty() {
            return Err(MeshError::Empty);
        }
        if let Some(colors) = self.colors {
            if colors.len() != self.positions.len() {
                return Err(MeshError::ColorCountMismatch {
                    positions: self.positions.len(),
                    colors: colors.len(),
                });
            }
        }
        Ok(self.positions.len() as u32)
    }

    /// Vertex buffer layouts in slot order: positions, then colors when present.
    pub fn vertex_layouts(&self) -> Vec<wgpu::VertexBufferLayout<'static>> {
        let mut layouts = vec![stream_layout(&POSITION_ATTRS)];
        if self.colors.is_some() {
            layouts.push(stream_layout(&COLOR_ATTRS));
        }
        layouts
    }
}

/// Static vertex buffers uploaded once at startup.
///
/// Each stream gets its own buffer: slot 0 holds positions, slot 1 colors.
pub struct MeshBuffers {
    positions: wgpu::Buffer,
    colors: Option<wgpu::Buffer>,
    layouts: Vec<wgpu::VertexBufferLayout<'static>>,
    vertex_count: u32,
}

impl MeshBuffers {
    pub fn upload(device: &wgpu::Device, label: &str, data: &MeshData<'_>) -> Result<Self, MeshError> {
        let vertex_count = data.validate()?;

        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} positions")),
            contents: bytemuck::cast_slice(data.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let colors = data.colors.map(|colors| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} colors")),
                contents: bytemuck::cast_slice(colors),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        log::debug!(
            "uploaded mesh '{label}': {vertex_count} vertices, {} bytes",
            positions.size() + colors.as_ref().map_or(0, |c| c.size())
        );

        Ok(Self {
            positions,
            colors,
            layouts: data.vertex_layouts(),
            vertex_count,
        })
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn vertex_layouts(&self) -> &[wgpu::VertexBufferLayout<'static>] {
        &self.layouts
    }

    /// Binds every stream to its vertex buffer slot.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.positions.slice(..));
        if let Some(colors) = &self.colors {
            pass.set_vertex_buffer(1, colors.slice(..));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRI: [[f32; 3]; 3] = [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];

    #[test]
    fn positions_only_is_valid() {
        assert_eq!(MeshData::new(&TRI).validate(), Ok(3));
    }

    #[test]
    fn empty_positions_rejected() {
        assert_eq!(MeshData::new(&[]).validate(), Err(MeshError::Empty));
    }

    #[test]
    fn color_count_must_match() {
        let colors = [[1.0, 0.0, 0.0]; 2];
        let err = MeshData::new(&TRI).with_colors(&colors).validate().unwrap_err();
        assert_eq!(err, MeshError::ColorCountMismatch { positions: 3, colors: 2 });
        assert_eq!(err.to_string(), "mesh has 3 positions but 2 colors");
    }

    #[test]
    fn layouts_follow_streams() {
        let colors = [[1.0, 0.0, 0.0]; 3];
        let plain = MeshData::new(&TRI).vertex_layouts();
        let colored = MeshData::new(&TRI).with_colors(&colors).vertex_layouts();

        assert_eq!(plain.len(), 1);
        assert_eq!(colored.len(), 2);

        assert_eq!(colored[0].array_stride, 12);
        assert_eq!(colored[0].attributes[0].shader_location, POSITION_LOCATION);
        assert_eq!(colored[0].attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(colored[1].array_stride, 12);
        assert_eq!(colored[1].attributes[0].shader_location, COLOR_LOCATION);
        assert_eq!(colored[1].attributes[0].offset, 0);
    }
}
