//! Shader stages and the diagnostics produced while compiling them.
//!
//! Compile failures never abort: the stage object is kept, the driver log is
//! reported through `log::error!` and stored next to the handle so that the
//! program built from it can expose every diagnostic of the build.

use log::error;
use std::ffi::CString;
use std::fmt;

mod backend;
mod program;

pub use backend::{Gl, ShaderBackend};
pub use program::{Program, Uniform};

#[cfg(test)]
pub(crate) use backend::mock;

/// Upper bound, in bytes, of a stored diagnostic message
pub const INFO_LOG_CAPACITY: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub(crate) fn gl_enum(self) -> gl::types::GLenum {
        match self {
            Stage::Vertex => gl::VERTEX_SHADER,
            Stage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => f.write_str("Vertex"),
            Stage::Fragment => f.write_str("Fragment"),
        }
    }
}

/// GLSL source tagged with the stage it belongs to.
///
/// Everything after the first NUL byte is ignored, so sources written as
/// C-style `"...\0"` literals can be used as they are.
#[derive(Clone, Copy, Debug)]
pub struct ShaderSource {
    stage: Stage,
    text: &'static str,
}

impl ShaderSource {
    pub const fn vertex(text: &'static str) -> Self {
        Self {
            stage: Stage::Vertex,
            text,
        }
    }

    pub const fn fragment(text: &'static str) -> Self {
        Self {
            stage: Stage::Fragment,
            text,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn text(&self) -> &'static str {
        match self.text.find('\0') {
            Some(end) => &self.text[..end],
            None => self.text,
        }
    }

    pub(crate) fn to_cstring(&self) -> CString {
        // `text` stops at the first NUL so this cannot fail
        CString::new(self.text()).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    Compile(Stage),
    Link,
}

/// A driver log captured after a failed compile or link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, log: String) -> Self {
        Self {
            kind,
            message: bound_log(log),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Compile(stage) => {
                write!(f, "Error ({} shader): {}", stage, self.message)
            }
            DiagnosticKind::Link => write!(f, "Error (Shader program): {}", self.message),
        }
    }
}

// Cuts the log to `INFO_LOG_CAPACITY` bytes on a char boundary and drops
// the trailing NULs and newlines drivers like to append
fn bound_log(mut log: String) -> String {
    if log.len() > INFO_LOG_CAPACITY {
        let mut end = INFO_LOG_CAPACITY;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    let trimmed = log.trim_end_matches(|c: char| c == '\0' || c.is_whitespace());
    trimmed.to_string()
}

/// A compiled (or failed) shader stage.
///
/// The stage object is released when this value is dropped, which is the
/// owner's job once the program has been linked.
pub struct Shader<B: ShaderBackend = Gl> {
    id: u32,
    stage: Stage,
    backend: B,
    diagnostic: Option<Diagnostic>,
}

impl<B: ShaderBackend> Shader<B> {
    pub fn compile(backend: B, source: ShaderSource) -> Self {
        let stage = source.stage();
        let id = backend.create_shader(stage);
        let diagnostic = match backend.compile_shader(id, &source.to_cstring()) {
            Ok(()) => None,
            Err(log) => {
                let diagnostic = Diagnostic::new(DiagnosticKind::Compile(stage), log);
                error!("{}", diagnostic);
                Some(diagnostic)
            }
        };
        Self {
            id,
            stage,
            backend,
            diagnostic,
        }
    }

    pub fn handle(&self) -> u32 {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_compiled(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }
}

impl<B: ShaderBackend> fmt::Debug for Shader<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shader")
            .field("id", &self.id)
            .field("stage", &self.stage)
            .field("compiled", &self.is_compiled())
            .finish()
    }
}

impl<B: ShaderBackend> Drop for Shader<B> {
    fn drop(&mut self) {
        self.backend.delete_shader(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockBackend;
    use super::*;

    const VALID: ShaderSource = ShaderSource::vertex(
        "#version 330 core\nlayout(location = 0) in vec3 position;\nvoid main()\n{\n gl_Position = vec4(position, 1.0);\n}\0",
    );

    #[test]
    fn source_text_stops_at_nul() {
        let source = ShaderSource::fragment("void main() {}\0garbage");
        assert_eq!(source.text(), "void main() {}");
        assert_eq!(source.to_cstring().as_bytes(), b"void main() {}");
        assert_eq!(source.stage(), Stage::Fragment);
    }

    #[test]
    fn long_logs_are_bounded_on_char_boundary() {
        let log = "é".repeat(INFO_LOG_CAPACITY);
        let diagnostic = Diagnostic::new(DiagnosticKind::Link, log);
        assert!(diagnostic.message().len() <= INFO_LOG_CAPACITY);
        assert!(diagnostic.message().chars().all(|c| c == 'é'));
    }

    #[test]
    fn trailing_nuls_are_trimmed() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::Compile(Stage::Vertex),
            "0:1(1): error: syntax error\n\0\0".to_string(),
        );
        assert_eq!(diagnostic.message(), "0:1(1): error: syntax error");
        assert_eq!(
            diagnostic.to_string(),
            "Error (Vertex shader): 0:1(1): error: syntax error"
        );
    }

    #[test]
    fn valid_source_compiles_without_diagnostic() {
        let backend = MockBackend::default();
        let shader = Shader::compile(backend.clone(), VALID);
        assert!(shader.is_compiled());
        assert_ne!(shader.handle(), 0);
        assert_eq!(shader.stage(), Stage::Vertex);
    }

    #[test]
    fn invalid_source_keeps_the_stage_and_reports() {
        let backend = MockBackend::default();
        let shader = Shader::compile(
            backend.clone(),
            ShaderSource::fragment("#version 330 core\nout vec4 color;\0"),
        );
        assert!(!shader.is_compiled());
        assert_ne!(shader.handle(), 0);
        let diagnostic = shader.diagnostic().expect("diagnostic");
        assert_eq!(diagnostic.kind(), DiagnosticKind::Compile(Stage::Fragment));
        assert!(!diagnostic.message().is_empty());
        assert!(diagnostic.message().len() <= INFO_LOG_CAPACITY);
    }

    #[test]
    fn dropping_a_stage_releases_it() {
        let backend = MockBackend::default();
        let id = {
            let shader = Shader::compile(backend.clone(), VALID);
            assert!(backend.is_live_shader(shader.handle()));
            shader.handle()
        };
        assert!(!backend.is_live_shader(id));
    }
}
