use std::path::Path;

use anyhow::{Context, Result};

use orbit_engine::camera::{mvp, Mat4, OrbitCamera, OrbitPath, Projection};
use orbit_engine::core::{App, AppControl, FrameCtx, InitCtx};
use orbit_engine::render::shader::{load_shader, shader_path};
use orbit_engine::render::{
    Color, MeshBuffers, MeshData, MeshPipeline, MvpBinding, RenderState, ShaderProgram,
    ShaderStage,
};

use crate::geometry::{triangle_range, POSITIONS, TRIANGLE_COUNT};

pub const VERTEX_SHADER: &str = "Transform.wgsl";
pub const FRAGMENT_SHADERS: [&str; TRIANGLE_COUNT] = ["FragmentShader1.wgsl", "FragmentShader2.wgsl"];

const CLEAR: Color = Color::new(0.0, 0.0, 0.4, 0.0);

/// Field of view passed straight through as radians.
const FOV_Y: f32 = 45.05;

/// One program per triangle, each with its own `MVP` slot.
struct Program {
    pipeline: MeshPipeline,
    mvp: MvpBinding,
}

struct Scene {
    mesh: MeshBuffers,
    programs: Vec<Program>,
}

pub struct TrianglesApp {
    camera: OrbitCamera,
    projection: Projection,
    scene: Option<Scene>,
}

impl TrianglesApp {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(OrbitPath::Swing, 10.0, 0.05),
            projection: Projection::new(FOV_Y, 2.0, 0.1, 100.0),
            scene: None,
        }
    }

    fn mvp(&self) -> Mat4 {
        mvp(&self.projection, self.camera.view(), Mat4::IDENTITY)
    }

    /// Moves the camera for the next frame; quitting is decided only after the
    /// current frame was presented.
    fn end_frame(&mut self, control: AppControl, quit: bool) -> AppControl {
        self.camera.advance();
        if quit { AppControl::Exit } else { control }
    }
}

impl Default for TrianglesApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for TrianglesApp {
    fn on_init(&mut self, ctx: &InitCtx<'_, '_>) -> Result<()> {
        let rctx = ctx.render_ctx();
        let shader_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");

        let vertex = load_shader(
            rctx.device,
            &shader_path(VERTEX_SHADER, &shader_dir),
            ShaderStage::Vertex,
        )?;

        let data = MeshData::new(&POSITIONS);
        let mesh = MeshBuffers::upload(rctx.device, "triangles", &data)
            .context("failed to upload triangle geometry")?;

        let mvp_layout = MvpBinding::layout(rctx.device);

        let mut programs = Vec::with_capacity(TRIANGLE_COUNT);
        for (i, file) in FRAGMENT_SHADERS.iter().enumerate() {
            let fragment = load_shader(
                rctx.device,
                &shader_path(file, &shader_dir),
                ShaderStage::Fragment,
            )?;
            let program = ShaderProgram::new(vertex.clone(), fragment);

            let label = format!("triangle {}", i + 1);
            let pipeline = MeshPipeline::new(
                &rctx,
                &label,
                &program,
                mesh.vertex_layouts(),
                &mvp_layout,
                RenderState::ALPHA_BLENDED,
            )?;
            let mvp = MvpBinding::new(rctx.device, &mvp_layout, &label);

            programs.push(Program { pipeline, mvp });
        }

        log::info!(
            "triangles ready: {} vertices, {} programs",
            mesh.vertex_count(),
            programs.len()
        );

        self.scene = Some(Scene { mesh, programs });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let mvp = self.mvp();
        let Some(scene) = &self.scene else {
            return AppControl::Continue;
        };

        for program in &scene.programs {
            program.mvp.write(ctx.gpu.queue(), mvp);
        }

        let control = ctx.render(CLEAR, |_, pass| {
            scene.mesh.bind(pass);
            for (i, program) in scene.programs.iter().enumerate() {
                pass.set_pipeline(program.pipeline.raw());
                pass.set_bind_group(0, program.mvp.bind_group(), &[]);
                pass.draw(triangle_range(i), 0..1);
            }
        });

        self.end_frame(control, ctx.quit_requested())
    }

    fn on_exit(&mut self) {
        if self.scene.take().is_some() {
            log::info!("triangle resources released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_swing_path() {
        let app = TrianglesApp::new();
        assert_eq!(app.camera.path, OrbitPath::Swing);
        assert_eq!(app.camera.angle, 10.0);
        assert_eq!(app.camera.step, 0.05);
    }

    #[test]
    fn projection_is_twice_as_wide_as_tall() {
        let app = TrianglesApp::new();
        assert_eq!(app.projection.aspect, 2.0);
        assert_eq!(app.projection.fov_y_radians, 45.05);
        assert!(app.mvp().is_finite());
    }

    #[test]
    fn camera_moves_once_per_frame() {
        let mut app = TrianglesApp::new();
        let before = app.mvp();
        app.camera.advance();
        assert!((app.camera.angle - 10.05).abs() < 1e-12);
        assert_ne!(before, app.mvp());
    }

    #[test]
    fn shader_files_ship_with_the_crate() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
        assert!(dir.join(VERTEX_SHADER).is_file());
        for file in FRAGMENT_SHADERS {
            assert!(dir.join(file).is_file(), "{file}");
        }
    }

    #[test]
    fn escape_ends_the_loop_after_the_frame_is_shown() {
        let mut app = TrianglesApp::new();
        assert_eq!(app.end_frame(AppControl::Continue, true), AppControl::Exit);
        assert!((app.camera.angle - 10.05).abs() < 1e-12);
    }

    #[test]
    fn frame_control_passes_through_without_quit() {
        let mut app = TrianglesApp::new();
        assert_eq!(app.end_frame(AppControl::Continue, false), AppControl::Continue);
        assert_eq!(app.end_frame(AppControl::Exit, false), AppControl::Exit);
    }

    #[test]
    fn manifest_has_no_direct_gpu_dependency() {
        let manifest = include_str!("../Cargo.toml");
        assert!(!manifest.lines().any(|l| l.trim_start().starts_with("wgpu")));
    }
}
