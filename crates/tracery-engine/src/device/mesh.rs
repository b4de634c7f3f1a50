use anyhow::{Result, anyhow};
use glow::HasContext as _;

/// Borrowed CPU-side mesh description.
///
/// `positions` is tightly packed `xyz` triples; `indices` is a triangle
/// list.
#[derive(Debug, Copy, Clone)]
pub struct MeshData<'a> {
    pub positions: &'a [f32],
    pub indices: &'a [u32],
}

impl MeshData<'_> {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// GPU mesh: one vertex array binding a static vertex buffer and index
/// buffer, position-only layout at attribute slot 0.
pub struct Mesh {
    vao: glow::VertexArray,
    index_count: i32,
}

impl Mesh {
    /// Uploads `data` into a fresh vertex array.
    ///
    /// Vertex and index content is not validated; the only `Err` is a failed
    /// GL object allocation.
    pub fn upload(gl: &glow::Context, data: &MeshData) -> Result<Self> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to allocate vertex array: {e}"))?;
            let index_buffer = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to allocate index buffer: {e}"))?;
            let vertex_buffer = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to allocate vertex buffer: {e}"))?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(data.indices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data.positions),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 3 * size_of::<f32>() as i32, 0);
            gl.enable_vertex_attrib_array(0);

            // The element buffer binding lives in the VAO; unbind the VAO
            // first so it is kept.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                vao,
                index_count: data.index_count() as i32,
            })
        }
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(Some(self.vao)) };
    }

    /// Issues one indexed triangle-list draw covering the whole mesh.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe { gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0) };
    }

    pub fn index_count(&self) -> i32 {
        self.index_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [f32; 12] = [
        0.5, 0.5, 0.0, //
        0.5, -0.5, 0.0, //
        -0.5, -0.5, 0.0, //
        -0.5, 0.5, 0.0, //
    ];
    const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

    #[test]
    fn counts_follow_the_layout() {
        let data = MeshData {
            positions: &POSITIONS,
            indices: &INDICES,
        };
        assert_eq!(data.vertex_count(), 4);
        assert_eq!(data.index_count(), 6);
        assert_eq!(data.triangle_count(), 2);
    }

    #[test]
    fn triangle_count_is_indices_over_three() {
        for n in [3usize, 6, 9, 36] {
            let indices = vec![0u32; n];
            let data = MeshData {
                positions: &POSITIONS,
                indices: &indices,
            };
            assert_eq!(data.triangle_count(), n / 3);
        }
    }
}
