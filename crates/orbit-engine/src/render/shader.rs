//! WGSL shader loading.
//!
//! Shader sources live next to each binary as plain files with fixed names and
//! are read once at startup. Each file holds exactly one stage: vertex files
//! export `vs_main`, fragment files export `fs_main`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Pipeline stage a shader module is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// WGSL entry point expected in a module of this stage.
    pub fn entry_point(self) -> &'static str {
        match self {
            Self::Vertex => "vs_main",
            Self::Fragment => "fs_main",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failure while loading or compiling a shader file.
#[derive(Debug)]
pub enum ShaderError {
    /// The source file could not be read.
    Read { path: PathBuf, source: std::io::Error },
    /// The source was rejected by the shader compiler.
    Compile { path: PathBuf, message: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "impossible to open shader {}: {}", path.display(), source)
            }
            Self::Compile { path, message } => {
                write!(f, "shader {} failed to compile: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Compile { .. } => None,
        }
    }
}

/// Resolves a fixed shader file name.
///
/// Looked up, in order: the working directory, `./shaders/`, then `shader_dir`
/// (usually the binary crate's own `shaders/` directory). When nothing exists the
/// working-directory path is returned so the read error names the expected file.
pub fn shader_path(file: &str, shader_dir: &Path) -> PathBuf {
    let candidates = [
        PathBuf::from(file),
        Path::new("shaders").join(file),
        shader_dir.join(file),
    ];

    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(file))
}

/// Reads a shader source file.
pub fn read_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and compiles a single-stage WGSL file.
pub fn load_shader(
    device: &wgpu::Device,
    path: &Path,
    stage: ShaderStage,
) -> Result<wgpu::ShaderModule, ShaderError> {
    log::info!("compiling {stage} shader: {}", path.display());
    let source = read_source(path)?;
    compile(device, path, &source)
}

/// Compiles WGSL source, surfacing validation errors instead of panicking.
pub fn compile(
    device: &wgpu::Device,
    path: &Path,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let label = path.display().to_string();

    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match pollster::block_on(scope.pop()) {
        Some(err) => Err(ShaderError::Compile {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
        None => Ok(module),
    }
}

/// Linked vertex + fragment pair.
///
/// Modules are reference counted by wgpu, so several programs may share one
/// vertex module.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    pub fn new(vertex: wgpu::ShaderModule, fragment: wgpu::ShaderModule) -> Self {
        Self { vertex, fragment }
    }

    /// Loads both stages from disk.
    pub fn load(
        device: &wgpu::Device,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, ShaderError> {
        let vertex = load_shader(device, vertex_path, ShaderStage::Vertex)?;
        let fragment = load_shader(device, fragment_path, ShaderStage::Fragment)?;
        Ok(Self::new(vertex, fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_points_per_stage() {
        assert_eq!(ShaderStage::Vertex.entry_point(), "vs_main");
        assert_eq!(ShaderStage::Fragment.entry_point(), "fs_main");
    }

    #[test]
    fn stage_display() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn missing_file_resolves_to_bare_name() {
        let p = shader_path("definitely-missing.wgsl", Path::new("/nonexistent"));
        assert_eq!(p, PathBuf::from("definitely-missing.wgsl"));
    }

    #[test]
    fn shader_dir_is_searched() {
        // This source file is a stand-in for any existing file in the fallback dir.
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("render");
        let p = shader_path("shader.rs", &dir);
        assert_eq!(p, dir.join("shader.rs"));
    }

    #[test]
    fn read_error_names_the_file() {
        let err = read_source(Path::new("no/such/shader.wgsl")).unwrap_err();
        assert!(matches!(err, ShaderError::Read { .. }));
        let msg = err.to_string();
        assert!(msg.contains("no/such/shader.wgsl"), "{msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn compile_error_display() {
        let err = ShaderError::Compile {
            path: PathBuf::from("a.wgsl"),
            message: "unexpected token".into(),
        };
        assert_eq!(err.to_string(), "shader a.wgsl failed to compile: unexpected token");
        assert!(std::error::Error::source(&err).is_none());
    }
}
