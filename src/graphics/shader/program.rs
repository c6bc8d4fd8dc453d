use super::{Diagnostic, DiagnosticKind, Gl, Shader, ShaderBackend, ShaderSource, Stage};
use glam::Mat4;
use log::{error, warn};
use std::ffi::CString;

/// A linked shader program.
///
/// Building one never fails: compile and link errors are logged, kept in
/// [`Program::diagnostics`], and the (possibly unusable) handle is returned
/// anyway. Drawing with an unlinked program renders nothing useful.
pub struct Program<B: ShaderBackend = Gl> {
    id: u32,
    backend: B,
    linked: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<B: ShaderBackend> Program<B> {
    /// Links the two stages and detaches them again.
    ///
    /// The stages stay alive: they are released by whoever owns them.
    pub fn link(backend: B, vertex: &Shader<B>, fragment: &Shader<B>) -> Self {
        debug_assert_eq!(vertex.stage(), Stage::Vertex);
        debug_assert_eq!(fragment.stage(), Stage::Fragment);

        let id = backend.create_program();
        backend.attach_shader(id, vertex.handle());
        backend.attach_shader(id, fragment.handle());

        let mut diagnostics: Vec<Diagnostic> = vertex
            .diagnostic()
            .into_iter()
            .chain(fragment.diagnostic())
            .cloned()
            .collect();

        let linked = match backend.link_program(id) {
            Ok(()) => true,
            Err(log) => {
                let diagnostic = Diagnostic::new(DiagnosticKind::Link, log);
                error!("{}", diagnostic);
                diagnostics.push(diagnostic);
                false
            }
        };

        backend.detach_shader(id, vertex.handle());
        backend.detach_shader(id, fragment.handle());

        Self {
            id,
            backend,
            linked,
            diagnostics,
        }
    }

    /// Compiles both sources, links them and releases the stages
    pub fn from_sources(backend: B, vertex: ShaderSource, fragment: ShaderSource) -> Self {
        let vs = Shader::compile(backend.clone(), vertex);
        let fs = Shader::compile(backend.clone(), fragment);
        Self::link(backend, &vs, &fs)
    }

    pub fn handle(&self) -> u32 {
        self.id
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Looks a uniform up by name.
    ///
    /// A name the program doesn't know gives an inert [`Uniform`]: writes to
    /// it are ignored by the driver.
    pub fn uniform(&self, name: &str) -> Uniform {
        let location = match CString::new(name) {
            Ok(cname) => self.backend.uniform_location(self.id, &cname),
            Err(_) => -1,
        };
        if location < 0 {
            warn!("uniform `{}` is not active in program {}", name, self.id);
        }
        Uniform(location)
    }
}

impl Program<Gl> {
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) }
    }
}

impl<B: ShaderBackend> Drop for Program<B> {
    fn drop(&mut self) {
        self.backend.delete_program(self.id);
    }
}

/// Location of a uniform in a linked program, -1 when absent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uniform(i32);

impl Uniform {
    pub fn location(self) -> i32 {
        self.0
    }

    pub fn is_active(self) -> bool {
        self.0 >= 0
    }

    // The setters write to the program currently in use.

    pub unsafe fn set_f32(self, value: f32) {
        gl::Uniform1f(self.0, value);
    }

    pub unsafe fn set_vec3(self, value: [f32; 3]) {
        gl::Uniform3fv(self.0, 1, value.as_ptr());
    }

    pub unsafe fn set_mat4(self, value: &Mat4) {
        gl::UniformMatrix4fv(self.0, 1, gl::FALSE, value.to_cols_array().as_ptr());
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockBackend;
    use super::super::INFO_LOG_CAPACITY;
    use super::*;

    const VERTEX: ShaderSource = ShaderSource::vertex(
        "#version 330 core\n\
         layout(location = 0) in vec3 position;\n\
         uniform mat4 model;\n\
         void main()\n\
         {\n\
         \x20   gl_Position = model * vec4(position, 1.0);\n\
         }\0",
    );

    const FRAGMENT: ShaderSource = ShaderSource::fragment(
        "#version 330 core\n\
         out vec4 fragmentColor;\n\
         void main()\n\
         {\n\
         \x20   fragmentColor = vec4(0.5, 0.3, 0.7, 1.0);\n\
         }\0",
    );

    const BROKEN_FRAGMENT: ShaderSource =
        ShaderSource::fragment("#version 330 core\nout vec4 fragmentColor;\nvoid mian() {}\0");

    #[test]
    fn valid_sources_link_to_a_handle() {
        let backend = MockBackend::default();
        let program = Program::from_sources(backend.clone(), VERTEX, FRAGMENT);
        assert_ne!(program.handle(), 0);
        assert!(program.is_linked());
        assert!(program.diagnostics().is_empty());
        assert!(backend.is_live_program(program.handle()));
    }

    #[test]
    fn invalid_source_is_reported_and_linking_still_happens() {
        let backend = MockBackend::default();
        let program = Program::from_sources(backend.clone(), VERTEX, BROKEN_FRAGMENT);

        assert_ne!(program.handle(), 0);
        assert!(!program.is_linked());

        let kinds: Vec<_> = program.diagnostics().iter().map(Diagnostic::kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::Compile(Stage::Fragment), DiagnosticKind::Link]
        );
        for diagnostic in program.diagnostics() {
            assert!(!diagnostic.message().is_empty());
            assert!(diagnostic.message().len() <= INFO_LOG_CAPACITY);
        }
    }

    #[test]
    fn stages_are_detached_but_owned_by_the_caller() {
        let backend = MockBackend::default();
        let vs = Shader::compile(backend.clone(), VERTEX);
        let fs = Shader::compile(backend.clone(), FRAGMENT);
        let program = Program::link(backend.clone(), &vs, &fs);

        assert!(backend.attached(program.handle()).is_empty());
        assert!(backend.is_live_shader(vs.handle()));
        assert!(backend.is_live_shader(fs.handle()));

        let (vs_id, fs_id) = (vs.handle(), fs.handle());
        drop(vs);
        drop(fs);
        assert!(!backend.is_live_shader(vs_id));
        assert!(!backend.is_live_shader(fs_id));
        assert!(program.is_linked());
    }

    #[test]
    fn from_sources_releases_its_stages() {
        let backend = MockBackend::default();
        let program = Program::from_sources(backend.clone(), VERTEX, FRAGMENT);
        // ids 1 and 2 went to the stages, 3 to the program
        assert_eq!(program.handle(), 3);
        assert!(!backend.is_live_shader(1));
        assert!(!backend.is_live_shader(2));
    }

    #[test]
    fn dropping_the_program_deletes_it() {
        let backend = MockBackend::default();
        let id = Program::from_sources(backend.clone(), VERTEX, FRAGMENT).handle();
        assert!(!backend.is_live_program(id));
    }

    #[test]
    fn uniforms_resolve_by_name() {
        let backend = MockBackend::default();
        let program = Program::from_sources(backend, VERTEX, FRAGMENT);
        assert!(program.uniform("model").is_active());
        assert_eq!(program.uniform("view").location(), 1);

        let missing = program.uniform("projection");
        assert!(!missing.is_active());
        assert_eq!(missing.location(), -1);
        assert!(!program.uniform("bad\0name").is_active());
    }
}
