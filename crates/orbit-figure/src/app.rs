use std::path::Path;

use anyhow::{Context, Result};

use orbit_engine::camera::{mvp, Mat4, OrbitCamera, OrbitPath, Projection};
use orbit_engine::core::{App, AppControl, FrameCtx, InitCtx};
use orbit_engine::render::shader::shader_path;
use orbit_engine::render::{
    Color, MeshBuffers, MeshData, MeshPipeline, MvpBinding, RenderState, ShaderProgram,
};

use crate::geometry::{COLORS, POSITIONS};

pub const VERTEX_SHADER: &str = "TransformVertexShader.wgsl";
pub const FRAGMENT_SHADER: &str = "ColorFragmentShader.wgsl";

const CLEAR: Color = Color::new(0.0, 0.0, 0.4, 0.0);

/// GPU objects created in `on_init`, released in `on_exit`.
struct Scene {
    mesh: MeshBuffers,
    mvp: MvpBinding,
    pipeline: MeshPipeline,
}

pub struct FigureApp {
    camera: OrbitCamera,
    projection: Projection,
    scene: Option<Scene>,
}

impl FigureApp {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(OrbitPath::Ellipse, 10.0, 0.025),
            projection: Projection::new(45f32.to_radians(), 4.0 / 3.0, 0.1, 100.0),
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

impl Default for FigureApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for FigureApp {
    fn on_init(&mut self, ctx: &InitCtx<'_, '_>) -> Result<()> {
        let rctx = ctx.render_ctx();
        let shader_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");

        let program = ShaderProgram::load(
            rctx.device,
            &shader_path(VERTEX_SHADER, &shader_dir),
            &shader_path(FRAGMENT_SHADER, &shader_dir),
        )?;

        let data = MeshData::new(&POSITIONS).with_colors(&COLORS);
        let mesh = MeshBuffers::upload(rctx.device, "figure", &data)
            .context("failed to upload figure geometry")?;

        let mvp_layout = MvpBinding::layout(rctx.device);
        let mvp = MvpBinding::new(rctx.device, &mvp_layout, "figure");

        let pipeline = MeshPipeline::new(
            &rctx,
            "figure",
            &program,
            mesh.vertex_layouts(),
            &mvp_layout,
            RenderState::DEPTH_TESTED,
        )?;

        log::info!("figure ready: {} vertices", mesh.vertex_count());

        self.scene = Some(Scene { mesh, mvp, pipeline });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let mvp = self.mvp();
        let Some(scene) = &self.scene else {
            return AppControl::Continue;
        };

        scene.mvp.write(ctx.gpu.queue(), mvp);

        let control = ctx.render(CLEAR, |_, pass| {
            pass.set_pipeline(scene.pipeline.raw());
            pass.set_bind_group(0, scene.mvp.bind_group(), &[]);
            scene.mesh.bind(pass);
            pass.draw(0..scene.mesh.vertex_count(), 0..1);
        });

        if ctx.time.frame_index % 600 == 0 {
            log::debug!("frame {} angle {:.3}", ctx.time.frame_index, self.camera.angle);
        }

        self.end_frame(control, ctx.quit_requested())
    }

    fn on_exit(&mut self) {
        if self.scene.take().is_some() {
            log::info!("figure resources released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_engine::camera::Vec3;

    #[test]
    fn starts_on_the_ellipse_at_angle_ten() {
        let app = FigureApp::new();
        assert_eq!(app.camera.path, OrbitPath::Ellipse);
        assert_eq!(app.camera.angle, 10.0);
        assert_eq!(app.camera.step, 0.025);
        assert!((app.projection.aspect - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn origin_projects_inside_the_view() {
        let app = FigureApp::new();
        let clip = app.mvp() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn shader_files_ship_with_the_crate() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
        assert!(dir.join(VERTEX_SHADER).is_file());
        assert!(dir.join(FRAGMENT_SHADER).is_file());
    }

    #[test]
    fn escape_ends_the_loop_after_the_frame_is_shown() {
        let mut app = FigureApp::new();
        assert_eq!(app.end_frame(AppControl::Continue, true), AppControl::Exit);
        assert!((app.camera.angle - 10.025).abs() < 1e-12);
    }

    #[test]
    fn frame_control_passes_through_without_quit() {
        let mut app = FigureApp::new();
        assert_eq!(app.end_frame(AppControl::Continue, false), AppControl::Continue);
        assert_eq!(app.end_frame(AppControl::Exit, false), AppControl::Exit);
    }

    #[test]
    fn manifest_has_no_direct_gpu_dependency() {
        let manifest = include_str!("../Cargo.toml");
        assert!(!manifest.lines().any(|l| l.trim_start().starts_with("wgpu")));
    }
}
