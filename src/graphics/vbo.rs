use gl::types as gl_t;
use std::mem::size_of_val;

macro_rules! buffer {
    ($name: ident [$target: ident]: $elem: ty) => {
        /// An immutable GPU buffer, uploaded once with `STATIC_DRAW`
        pub struct $name {
            id: u32,
            len: usize,
        }

        impl $name {
            /// NOTE: the new buffer is left bound to its target
            pub unsafe fn new(data: &[$elem]) -> Self {
                let mut id: gl_t::GLuint = 0;
                gl::GenBuffers(1, &mut id);
                gl::BindBuffer(gl::$target, id);
                gl::BufferData(
                    gl::$target,
                    size_of_val(data) as gl_t::GLsizeiptr,
                    data.as_ptr() as *const _,
                    gl::STATIC_DRAW,
                );
                Self {
                    id,
                    len: data.len(),
                }
            }

            pub unsafe fn unbind() {
                gl::BindBuffer(gl::$target, 0);
            }

            /// Number of elements uploaded
            pub fn len(&self) -> usize {
                self.len
            }

            pub fn is_empty(&self) -> bool {
                self.len == 0
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                unsafe {
                    gl::DeleteBuffers(1, &self.id);
                }
            }
        }
    };
}

buffer! {VertexBufferObject[ARRAY_BUFFER]: f32}
buffer! {ElementBufferObject[ELEMENT_ARRAY_BUFFER]: u32}
