use glam::Mat4;

/// Perspective projection parameters.
///
/// Produces a right-handed projection with a `[0, 1]` depth range, which is what
/// wgpu expects in clip space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    pub fov_y_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub const fn new(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_radians,
            aspect,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, self.aspect, self.near, self.far)
    }
}

/// Composes `projection * view * model`.
///
/// Column vectors: the model transform applies first.
pub fn mvp(projection: &Projection, view: Mat4, model: Mat4) -> Mat4 {
    projection.matrix() * view * model
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn fig() -> Projection {
        Projection::new(45f32.to_radians(), 4.0 / 3.0, 0.1, 100.0)
    }

    #[test]
    fn near_plane_maps_to_depth_zero() {
        let clip = fig().matrix() * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert!((clip.z / clip.w).abs() < 1e-5);
    }

    #[test]
    fn far_plane_maps_to_depth_one() {
        let clip = fig().matrix() * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((clip.z / clip.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn aspect_scales_x_against_y() {
        let m = fig().matrix();
        let ratio = m.y_axis.y / m.x_axis.x;
        assert!((ratio - 4.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn fov_sets_vertical_focal_length() {
        let m = fig().matrix();
        let expected = 1.0 / (22.5f32.to_radians()).tan();
        assert!((m.y_axis.y - expected).abs() < 1e-5);
    }

    #[test]
    fn mvp_applies_model_first() {
        let proj = fig();
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        let model = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));

        let combined = mvp(&proj, view, model);
        let by_hand = proj.matrix() * (view * (model * Vec4::new(0.0, 0.0, 0.0, 1.0)));
        let p = combined * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(by_hand, 1e-5));
    }

    #[test]
    fn identity_model_and_view_is_projection() {
        let proj = fig();
        assert_eq!(mvp(&proj, Mat4::IDENTITY, Mat4::IDENTITY), proj.matrix());
    }
}
