//! The playground's colored demo cube.

use super::Vertex;

/// Axis-aligned cube centered at the origin, one flat color per face.
///
/// Non-indexed: 36 vertices, two triangles per face, straight from the
/// playground's vertex table. Face order is -X red, +X cyan, -Y green,
/// +Y magenta, -Z blue, +Z yellow.
pub fn colored_cube(half_extent: f32) -> Vec<Vertex> {
    let h = half_extent;
    // Corners named by sign bits (x, y, z): 0 is -h, 1 is +h.
    let p000 = [-h, -h, -h];
    let p001 = [-h, -h, h];
    let p010 = [-h, h, -h];
    let p011 = [-h, h, h];
    let p100 = [h, -h, -h];
    let p101 = [h, -h, h];
    let p110 = [h, h, -h];
    let p111 = [h, h, h];

    let faces: [([f32; 3], [f32; 4], [[f32; 3]; 6]); 6] = [
        (
            [-1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
            [p000, p010, p011, p000, p011, p001],
        ),
        (
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 1.0, 1.0],
            [p100, p110, p111, p100, p111, p101],
        ),
        (
            [0.0, -1.0, 0.0],
            [0.0, 1.0, 0.0, 1.0],
            [p000, p100, p101, p000, p101, p001],
        ),
        (
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 1.0, 1.0],
            [p010, p110, p111, p010, p111, p011],
        ),
        (
            [0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0, 1.0],
            [p000, p100, p110, p000, p110, p010],
        ),
        (
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 1.0],
            [p001, p101, p111, p001, p111, p011],
        ),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, color, corners) in faces {
        for position in corners {
            vertices.push(Vertex {
                position,
                normal,
                color,
            });
        }
    }
    vertices
}
