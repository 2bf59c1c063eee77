//! Flat terrain grid with incrementally averaged vertex normals.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Mesh, Vertex};

/// Terrain generation parameters.
///
/// Defaults build the playground's ground plane: a 20 by 20 patch sampled
/// every 0.01 world units at height -1, colored green.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Side length of the square patch, world units.
    pub extent: f32,
    /// Grid sampling interval, world units. Must be positive.
    pub step: f32,
    /// Constant height of every point.
    pub floor: f32,
    /// RGBA color applied to every vertex.
    pub color: [f32; 4],
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            extent: 20.0,
            step: 0.01,
            floor: -1.0,
            color: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

/// Rejected terrain parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TerrainError {
    #[error("terrain step must be positive, got {0}")]
    NonPositiveStep(f32),
    #[error("terrain extent must be non-negative, got {0}")]
    NegativeExtent(f32),
}

/// Builds the terrain mesh described by `config`.
///
/// The grid has `extent / step + 1` points per side (integer truncation), at
/// `(i * step, floor, j * step)` in row-major order with `i` outermost. Each
/// cell becomes two triangles with a fixed winding, and vertex normals are
/// smoothed over the faces that touch them.
pub fn generate(config: &TerrainConfig) -> Result<Mesh, TerrainError> {
    if config.step <= 0.0 {
        return Err(TerrainError::NonPositiveStep(config.step));
    }
    if config.extent < 0.0 {
        return Err(TerrainError::NegativeExtent(config.extent));
    }

    let side = (config.extent / config.step) as u32 + 1;
    let count = side as usize;
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(count * count),
        indices: Vec::with_capacity((count - 1) * (count - 1) * 6),
    };

    for i in 0..side {
        for j in 0..side {
            mesh.vertices.push(Vertex {
                position: [i as f32 * config.step, config.floor, j as f32 * config.step],
                normal: [0.0, 1.0, 0.0],
                color: config.color,
            });
        }
    }

    for i in 0..side - 1 {
        for j in 0..side - 1 {
            let a = i * side + j;
            let b = a + 1;
            let c = a + side;
            let d = c + 1;
            mesh.indices.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }

    smooth_normals(&mut mesh);
    Ok(mesh)
}

/// Folds face normals into the vertices as a running average, renormalizing
/// after every contribution.
///
/// Triangles are visited through the index buffer in threes; each vertex
/// touched by a face moves to `normalize((normal * seen + face) / (seen + 1))`
/// where `seen` counts its prior contributions. The result depends on
/// visitation order and is not the same as summing face normals and
/// normalizing once at the end.
fn smooth_normals(mesh: &mut Mesh) {
    let mut seen = vec![0u32; mesh.vertices.len()];
    let mut cursor = 2;
    while cursor < mesh.indices.len() {
        let first = mesh.indices[cursor] as usize;
        let second = mesh.indices[cursor - 1] as usize;
        let third = mesh.indices[cursor - 2] as usize;

        let p1 = Vec3::from(mesh.vertices[first].position);
        let p2 = Vec3::from(mesh.vertices[second].position);
        let p3 = Vec3::from(mesh.vertices[third].position);
        // Area-weighted face normal; note the reversed edge order.
        let face = (p3 - p1).cross(p2 - p1);

        for vertex in [first, second, third] {
            let weight = seen[vertex] as f32;
            let normal = Vec3::from(mesh.vertices[vertex].normal);
            let averaged = (normal * weight + face) / (weight + 1.0);
            mesh.vertices[vertex].normal = renormalize(averaged).to_array();
            seen[vertex] += 1;
        }

        cursor += 3;
    }
}

/// Divides by the exact length, returning zero for zero-length input.
fn renormalize(v: Vec3) -> Vec3 {
    let length = v.length();
    if length == 0.0 {
        Vec3::ZERO
    } else {
        v / length
    }
}
