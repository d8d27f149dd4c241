//! GPU rendering subsystem.
//!
//! Convention:
//! - geometry is world-space `[f32; 3]` positions, optionally with a parallel
//!   `[f32; 3]` color stream (locations 0 and 1)
//! - the vertex stage receives a single `MVP` uniform at group 0, binding 0
//! - a "program" is a vertex module plus a fragment module, loaded from WGSL files

mod color;
mod ctx;
pub mod mesh;
pub mod pipeline;
pub mod shader;
pub mod uniform;

pub use color::Color;
pub use ctx::RenderCtx;
pub use mesh::{MeshBuffers, MeshData, MeshError};
pub use pipeline::{BlendMode, MeshPipeline, RenderState};
pub use shader::{ShaderError, ShaderProgram, ShaderStage};
pub use uniform::{MvpBinding, MvpUniform};
