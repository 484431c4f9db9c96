use std::mem;

use gl::types::{GLsizei, GLsizeiptr, GLuint};

/// One vertex: a 3-component position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// GPU-resident vertex data plus its layout description.
///
/// The buffer is uploaded once with static-draw usage and is immutable
/// afterwards; there is no streaming or partial-upload path.
pub struct GeometryBuffer {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: GLsizei,
}

/// Positions land at attribute index 0 in the vertex stage.
const POSITION_ATTRIBUTE: GLuint = 0;

impl GeometryBuffer {
    /// Uploads `vertices` in one transfer and records the layout.
    ///
    /// Layout: tightly packed 3-float positions at attribute 0.
    pub fn upload(vertices: &[Vertex]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);

        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                POSITION_ATTRIBUTE,
                3,
                gl::FLOAT,
                gl::FALSE,
                mem::size_of::<Vertex>() as GLsizei,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(POSITION_ATTRIBUTE);

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        log::debug!(
            "uploaded {} vertices ({} bytes) to buffer {vbo}",
            vertices.len(),
            bytes.len()
        );

        Self {
            vao,
            vbo,
            vertex_count: vertices.len() as GLsizei,
        }
    }

    /// Draws the whole buffer as triangles, leaving no layout bound.
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count);
            gl::BindVertexArray(0);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count as usize
    }
}

impl Drop for GeometryBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
