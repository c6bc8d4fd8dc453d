use super::{Stage, INFO_LOG_CAPACITY};
use gl::types::{GLchar, GLint};
use std::ffi::CStr;
use std::marker::PhantomData;
use std::ptr;

/// The calls the program builder makes against the graphics context
pub trait ShaderBackend: Clone {
    fn create_shader(&self, stage: Stage) -> u32;
    /// Uploads `source` into `shader` and compiles it, returning the info log on failure
    fn compile_shader(&self, shader: u32, source: &CStr) -> Result<(), String>;
    fn delete_shader(&self, shader: u32);

    fn create_program(&self) -> u32;
    fn attach_shader(&self, program: u32, shader: u32);
    fn detach_shader(&self, program: u32, shader: u32);
    /// Links `program`, returning the info log on failure
    fn link_program(&self, program: u32) -> Result<(), String>;
    fn delete_program(&self, program: u32);

    /// Returns -1 when the program has no active uniform called `name`
    fn uniform_location(&self, program: u32, name: &CStr) -> i32;
}

/// The OpenGL context current on this thread.
///
/// Holding one is a promise that the function pointers are loaded and the
/// context is current, which is what makes the trait methods safe to call.
#[derive(Clone, Copy, Debug)]
pub struct Gl {
    _not_send: PhantomData<*const ()>,
}

impl Gl {
    /// # Safety
    /// The GL functions must be loaded and a context must be current on the
    /// calling thread for as long as the value (and its copies) are used.
    pub unsafe fn current() -> Self {
        Gl {
            _not_send: PhantomData,
        }
    }
}

// Reads at most `INFO_LOG_CAPACITY` bytes of an info log
unsafe fn read_info_log(getter: impl FnOnce(GLint, &mut GLint, *mut GLchar)) -> String {
    let mut buffer = vec![0u8; INFO_LOG_CAPACITY];
    let mut len: GLint = 0;
    getter(INFO_LOG_CAPACITY as GLint, &mut len, buffer.as_mut_ptr() as *mut GLchar);
    buffer.truncate((len.max(0) as usize).min(INFO_LOG_CAPACITY));
    String::from_utf8_lossy(&buffer).into_owned()
}

impl ShaderBackend for Gl {
    fn create_shader(&self, stage: Stage) -> u32 {
        unsafe { gl::CreateShader(stage.gl_enum()) }
    }

    fn compile_shader(&self, shader: u32, source: &CStr) -> Result<(), String> {
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(shader);

            let mut status = 0;
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
            if status == 0 {
                Err(read_info_log(|cap, len, buf| {
                    gl::GetShaderInfoLog(shader, cap, len, buf)
                }))
            } else {
                Ok(())
            }
        }
    }

    fn delete_shader(&self, shader: u32) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> u32 {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        unsafe { gl::DetachShader(program, shader) }
    }

    fn link_program(&self, program: u32) -> Result<(), String> {
        unsafe {
            gl::LinkProgram(program);

            let mut status = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
            if status == 0 {
                Err(read_info_log(|cap, len, buf| {
                    gl::GetProgramInfoLog(program, cap, len, buf)
                }))
            } else {
                Ok(())
            }
        }
    }

    fn delete_program(&self, program: u32) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn uniform_location(&self, program: u32, name: &CStr) -> i32 {
        unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
    }
}
