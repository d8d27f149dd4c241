use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// `MVP` uniform as seen by the vertex stage (column-major `mat4x4<f32>`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MvpUniform {
    pub mvp: [[f32; 4]; 4],
}

impl From<Mat4> for MvpUniform {
    fn from(m: Mat4) -> Self {
        Self {
            mvp: m.to_cols_array_2d(),
        }
    }
}

/// Uniform buffer + bind group carrying one `MVP` matrix.
///
/// Each program owns a binding so draws with different programs never share
/// a uniform slot within a frame.
pub struct MvpBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl MvpBinding {
    /// Layout for group 0: a single vertex-visible uniform at binding 0.
    pub fn layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("orbit mvp bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<MvpUniform>() as u64,
                    ),
                },
                count: None,
            }],
        })
    }

    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} mvp ubo")),
            size: std::mem::size_of::<MvpUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} mvp bind group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { buffer, bind_group }
    }

    /// Queues an upload of `mvp`; visible to the next submitted frame.
    pub fn write(&self, queue: &wgpu::Queue, mvp: Mat4) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&MvpUniform::from(mvp)));
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn uniform_is_sixty_four_bytes() {
        assert_eq!(std::mem::size_of::<MvpUniform>(), 64);
    }

    #[test]
    fn matrix_is_stored_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let u = MvpUniform::from(m);
        assert_eq!(u.mvp[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.mvp[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn bytes_match_glam_layout() {
        let m = Mat4::from_cols_array(&std::array::from_fn(|i| i as f32));
        let u = MvpUniform::from(m);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats, &m.to_cols_array()[..]);
    }
}
