use super::{ElementBufferObject, VertexArrayObject, VertexBufferObject};
use std::mem::size_of;

/// Interleaved `f32` vertices, the triangle list indexing them and the
/// number of components of each attribute (attribute `i` lives at location `i`).
#[derive(Clone, Copy, Debug)]
pub struct Geometry<'a> {
    pub vertices: &'a [f32],
    pub indices: &'a [u32],
    pub layout: &'a [usize],
}

/// One vertex attribute as laid out in the vertex buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub location: u32,
    pub components: usize,
    /// Byte offset inside a vertex
    pub offset: usize,
}

impl<'a> Geometry<'a> {
    pub fn new(vertices: &'a [f32], indices: &'a [u32], layout: &'a [usize]) -> Self {
        let geometry = Self {
            vertices,
            indices,
            layout,
        };
        debug_assert_eq!(vertices.len() % geometry.floats_per_vertex(), 0);
        debug_assert!(indices
            .iter()
            .all(|&index| (index as usize) < geometry.vertex_count()));
        geometry
    }

    pub fn floats_per_vertex(&self) -> usize {
        self.layout.iter().sum()
    }

    /// Size of one vertex in bytes
    pub fn stride(&self) -> usize {
        self.floats_per_vertex() * size_of::<f32>()
    }

    pub fn vertex_count(&self) -> usize {
        match self.floats_per_vertex() {
            0 => 0,
            n => self.vertices.len() / n,
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + 'a {
        let layout = self.layout;
        let mut offset = 0;
        layout
            .iter()
            .enumerate()
            .map(move |(location, &components)| {
                let attribute = Attribute {
                    location: location as u32,
                    components,
                    offset,
                };
                offset += components * size_of::<f32>();
                attribute
            })
    }
}

/// A geometry uploaded to the GPU: vertex array, vertex buffer and element buffer
pub struct Mesh {
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    ebo: ElementBufferObject,
}

impl Mesh {
    /// NOTE: after this call there will be no vertex array bound
    pub unsafe fn new(geometry: &Geometry<'_>) -> Self {
        let vao = VertexArrayObject::new();
        VertexArrayObject::bind(&vao);

        let vbo = VertexBufferObject::new(geometry.vertices);
        // Recorded in the vertex array state, so it must be bound while the array is
        let ebo = ElementBufferObject::new(geometry.indices);

        let stride = geometry.stride();
        for attribute in geometry.attributes() {
            VertexArrayObject::f32_attrib_format(
                attribute.location,
                attribute.components as i32,
                stride,
                attribute.offset,
            );
        }

        VertexArrayObject::unbind();
        VertexBufferObject::unbind();
        Self {
            vao,
            _vbo: vbo,
            ebo,
        }
    }

    pub fn index_count(&self) -> usize {
        self.ebo.len()
    }

    /// Draws `count` indices as triangles, starting at index `first`
    pub unsafe fn draw(&self, count: usize, first: usize) {
        debug_assert!(first + count <= self.index_count());
        debug_assert!(count <= i32::MAX as usize);
        VertexArrayObject::bind(&self.vao);
        gl::DrawElements(
            gl::TRIANGLES,
            count as i32,
            gl::UNSIGNED_INT,
            (first * size_of::<u32>()) as *const _,
        );
        VertexArrayObject::unbind();
    }

    pub unsafe fn draw_all(&self) {
        self.draw(self.index_count(), 0);
    }
}
