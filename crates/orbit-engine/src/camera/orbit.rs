use glam::{Mat4, Vec3};

/// Parametric path followed by the camera eye and its look-at target.
///
/// Both are functions of the camera angle `a` (radians).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrbitPath {
    /// Eye on an ellipse around the Y axis, target circling the origin:
    /// eye `(2 cos a, 1, -6 sin a)`, target `(0.5 sin a, 0, 0.5 cos a)`.
    Ellipse,

    /// Eye swinging in front of the XY plane, target drifting along an ellipse:
    /// eye `(2 sin a, 1, 3 cos a)`, target `(0.5 cos a, 0, sin a)`.
    Swing,
}

impl OrbitPath {
    pub fn eye(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        match self {
            Self::Ellipse => vec3(2.0 * c, 1.0, -6.0 * s),
            Self::Swing => vec3(2.0 * s, 1.0, 3.0 * c),
        }
    }

    pub fn target(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        match self {
            Self::Ellipse => vec3(0.5 * s, 0.0, 0.5 * c),
            Self::Swing => vec3(0.5 * c, 0.0, s),
        }
    }
}

// Trigonometry runs in f64; only the result is narrowed.
fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x as f32, y as f32, z as f32)
}

/// Camera that advances a fixed angle per frame along an [`OrbitPath`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    pub angle: f64,
    pub step: f64,
    pub path: OrbitPath,
}

impl OrbitCamera {
    pub const fn new(path: OrbitPath, angle: f64, step: f64) -> Self {
        Self { angle, step, path }
    }

    pub fn eye(&self) -> Vec3 {
        self.path.eye(self.angle)
    }

    pub fn target(&self) -> Vec3 {
        self.path.target(self.angle)
    }

    /// Head is always up.
    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Right-handed world-to-view matrix for the current angle.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), self.up())
    }

    /// Moves the camera one step along its path.
    pub fn advance(&mut self) {
        self.angle += self.step;
    }
}
