//! This is a thin wrapper around basic OpenGL calls. Apart from the shader
//! builder, which goes through [`ShaderBackend`], it doesn't guarantee any
//! safety (thus most of it is unsafe).
mod mesh;
mod shader;
mod texture;
mod vao;
mod vbo;

pub use mesh::{Attribute, Geometry, Mesh};
pub use shader::{
    Diagnostic, DiagnosticKind, Gl, Program, Shader, ShaderBackend, ShaderSource, Stage, Uniform,
    INFO_LOG_CAPACITY,
};
pub use texture::{load_image, Texture};
pub use vao::VertexArrayObject;
pub use vbo::{ElementBufferObject, VertexBufferObject};
