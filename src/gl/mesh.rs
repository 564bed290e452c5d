use crate::{
    error::Error,
    gl::{BufferTarget, GlApi},
};

/// Cube corners with interleaved position and color, one corner per vertex.
#[rustfmt::skip]
pub(crate) const CUBE_VERTICES: [f32; 48] = [
    // positions          // colors
    -1.0, -1.0,  1.0,     1.0, 0.0, 0.0, // front face
     1.0, -1.0,  1.0,     0.0, 1.0, 0.0,
     1.0,  1.0,  1.0,     0.0, 0.0, 1.0,
    -1.0,  1.0,  1.0,     1.0, 1.0, 0.0,
    -1.0, -1.0, -1.0,     1.0, 0.0, 1.0, // back face
     1.0, -1.0, -1.0,     0.0, 1.0, 1.0,
     1.0,  1.0, -1.0,     0.5, 0.5, 0.5,
    -1.0,  1.0, -1.0,     1.0, 0.5, 0.5,
];

#[rustfmt::skip]
pub(crate) const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, // front
    1, 5, 6, 6, 2, 1, // right
    7, 6, 5, 5, 4, 7, // back
    4, 0, 3, 3, 7, 4, // left
    4, 5, 1, 1, 0, 4, // bottom
    3, 2, 6, 6, 7, 3, // top
];

/// Overlay rectangle in screen pixels, top-left origin.
#[rustfmt::skip]
pub(crate) const OVERLAY_VERTICES: [f32; 12] = [
    100.0, 100.0, 0.0,
    200.0, 100.0, 0.0,
    200.0, 200.0, 0.0,
    100.0, 200.0, 0.0,
];

pub(crate) const OVERLAY_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// An indexed triangle mesh uploaded to GPU buffers.
///
/// Owns a VAO plus the vertex and element buffers behind it. Deletion is
/// explicit ([`Mesh::delete`]) because the driver handle lives with the
/// owning render context.
pub(crate) struct Mesh {
    vao: u32,
    vbo: u32,
    ebo: u32,
    index_count: i32,
}

impl Mesh {
    /// Uploads interleaved float vertices and u32 indices.
    ///
    /// `attribute_sizes` lists the per-vertex float attributes in layout
    /// order (e.g. `[3, 3]` for position + color); stride and offsets are
    /// derived from it.
    pub(crate) fn upload<A: GlApi>(
        gl: &A,
        vertices: &[f32],
        indices: &[u32],
        attribute_sizes: &[i32],
    ) -> Result<Self, Error> {
        let vao = gl.create_vertex_array();
        if vao == 0 {
            return Err(Error::VertexArrayCreation);
        }
        gl.bind_vertex_array(vao);

        let vbo = gl.create_buffer();
        if vbo == 0 {
            gl.delete_vertex_array(vao);
            return Err(Error::BufferCreation("vertex"));
        }
        gl.bind_buffer(BufferTarget::Array, vbo);
        gl.buffer_data_f32(BufferTarget::Array, vertices);

        let ebo = gl.create_buffer();
        if ebo == 0 {
            gl.delete_buffer(vbo);
            gl.delete_vertex_array(vao);
            return Err(Error::BufferCreation("element"));
        }
        gl.bind_buffer(BufferTarget::ElementArray, ebo);
        gl.buffer_data_u32(BufferTarget::ElementArray, indices);

        let stride = attribute_sizes.iter().sum::<i32>() * std::mem::size_of::<f32>() as i32;
        let mut offset = 0;
        for (index, &components) in attribute_sizes.iter().enumerate() {
            gl.vertex_attrib(index as u32, components, stride, offset);
            offset += components * std::mem::size_of::<f32>() as i32;
        }

        Ok(Self {
            vao,
            vbo,
            ebo,
            index_count: indices.len() as i32,
        })
    }

    pub(crate) fn draw<A: GlApi>(&self, gl: &A) {
        gl.bind_vertex_array(self.vao);
        gl.draw_triangles(self.index_count);
    }

    pub(crate) fn delete<A: GlApi>(&self, gl: &A) {
        gl.delete_buffer(self.vbo);
        gl.delete_buffer(self.ebo);
        gl.delete_vertex_array(self.vao);
    }
}
