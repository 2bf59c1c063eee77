//! GPU-ready mesh containers shared by the shape generators.

pub mod cube;
pub mod terrain;

/// One mesh vertex: position, averaged normal, RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Indexed triangle mesh ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 40);
    }

    #[test]
    fn test_byte_views_cover_the_buffers() {
        let mesh = Mesh {
            vertices: vec![
                Vertex {
                    position: [1.0, 2.0, 3.0],
                    normal: [0.0, 1.0, 0.0],
                    color: [1.0, 0.0, 0.0, 1.0],
                },
                Vertex {
                    position: [4.0, 5.0, 6.0],
                    normal: [0.0, 1.0, 0.0],
                    color: [1.0, 0.0, 0.0, 1.0],
                },
            ],
            indices: vec![0, 1, 0],
        };

        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_bytes().len(), 2 * std::mem::size_of::<Vertex>());
        assert_eq!(mesh.index_bytes().len(), 3 * std::mem::size_of::<u32>());
    }
}
