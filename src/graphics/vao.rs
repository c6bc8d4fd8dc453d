use gl::types as gl_t;

pub struct VertexArrayObject {
    id: u32,
}

impl VertexArrayObject {
    pub unsafe fn new() -> Self {
        let mut id: gl_t::GLuint = 0;
        gl::GenVertexArrays(1, &mut id);
        Self { id }
    }

    pub unsafe fn bind(vao: &Self) {
        gl::BindVertexArray(vao.id);
    }

    pub unsafe fn unbind() {
        gl::BindVertexArray(0);
    }

    /// Describes and enables a float attribute of the bound array buffer.
    ///
    /// `stride` and `offset` are in bytes.
    pub unsafe fn f32_attrib_format(location: u32, components: i32, stride: usize, offset: usize) {
        gl::VertexAttribPointer(
            location,
            components,
            gl::FLOAT,
            gl::FALSE,
            stride as i32,
            offset as *const _,
        );
        gl::EnableVertexAttribArray(location);
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
