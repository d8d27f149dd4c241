//! Camera math.
//!
//! The demos look at static geometry from a camera that travels along a fixed
//! parametric path. Everything here is plain [glam](https://docs.rs/glam) math
//! and has no GPU dependency; types are re-exported so binaries don't need to
//! depend on glam directly.

mod orbit;
mod projection;

pub use glam::{Mat4, Vec3};
pub use orbit::{OrbitCamera, OrbitPath};
pub use projection::{mvp, Projection};
