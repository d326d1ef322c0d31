use bytemuck::{Pod, Zeroable};
use gl::types::*;
use std::mem;

/// Position + color, tightly packed. Attribute 0 is the position, 1 the color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const STRIDE: usize = mem::size_of::<Vertex>();
    pub const COLOR_OFFSET: usize = mem::size_of::<[f32; 3]>();

    const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// One vertex per corner of a unit cube centered on the origin.
pub const CUBE_VERTICES: [Vertex; 8] = [
    Vertex::new([-0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    Vertex::new([0.5, -0.5, -0.5], [0.0, 1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [0.0, 0.0, 1.0]),
    Vertex::new([-0.5, 0.5, -0.5], [1.0, 1.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.5], [1.0, 0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, 1.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 1.0, 1.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.2, 0.2, 0.2]),
];

/// Two triangles per face, counter-clockwise when seen from outside.
#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    4, 5, 6, 6, 7, 4, // front
    1, 0, 3, 3, 2, 1, // back
    0, 4, 7, 7, 3, 0, // left
    5, 1, 2, 2, 6, 5, // right
    7, 6, 2, 2, 3, 7, // top
    0, 1, 5, 5, 4, 0, // bottom
];

/// The cube uploaded to GPU buffers. Immutable after upload.
pub struct CubeMesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
    index_count: GLsizei,
}

impl CubeMesh {
    pub fn upload() -> Self {
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&CUBE_VERTICES);
        let index_bytes: &[u8] = bytemuck::cast_slice(&CUBE_INDICES);

        let (mut vao, mut vbo, mut ebo) = (0, 0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);

            gl::BindVertexArray(vao);

            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                vertex_bytes.len() as GLsizeiptr,
                vertex_bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                index_bytes.len() as GLsizeiptr,
                index_bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            // Position attribute
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                Vertex::STRIDE as GLsizei,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            // Color attribute
            gl::VertexAttribPointer(
                1,
                3,
                gl::FLOAT,
                gl::FALSE,
                Vertex::STRIDE as GLsizei,
                Vertex::COLOR_OFFSET as *const _,
            );
            gl::EnableVertexAttribArray(1);

            // The EBO binding is VAO state, so only the VAO is unbound.
            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        log::debug!("Cube uploaded: vao={} vbo={} ebo={}", vao, vbo, ebo);

        Self {
            vao,
            vbo,
            ebo,
            index_count: CUBE_INDICES.len() as GLsizei,
        }
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                gl::TRIANGLES,
                self.index_count,
                gl::UNSIGNED_INT,
                std::ptr::null(),
            );
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for CubeMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 12);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&CUBE_VERTICES).len(), 8 * 24);
    }

    #[test]
    fn test_indices_reference_existing_vertices() {
        assert_eq!(CUBE_INDICES.len(), 36);
        assert!(CUBE_INDICES
            .iter()
            .all(|&i| (i as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn test_every_corner_is_used() {
        for corner in 0..CUBE_VERTICES.len() as u32 {
            let uses = CUBE_INDICES.iter().filter(|&&i| i == corner).count();
            assert!(uses >= 3, "corner {} used {} times", corner, uses);
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        let corner = |i: u32| Vec3::from(CUBE_VERTICES[i as usize].position);

        for tri in CUBE_INDICES.chunks(3) {
            let (a, b, c) = (corner(tri[0]), corner(tri[1]), corner(tri[2]));
            let normal = (b - a).cross(c - b);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {:?} winds inward",
                tri
            );
        }
    }

    #[test]
    fn test_triangles_are_not_degenerate() {
        for tri in CUBE_INDICES.chunks(3) {
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
    }
}
