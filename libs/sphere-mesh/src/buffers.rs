//! Mesh buffer export for GPU rendering.
//!
//! This module narrows a finished [`RawMesh`] into GPU-friendly `f32` / `u32`
//! buffers. The copy is purely a type conversion; values and ordering are
//! unchanged.

use crate::mesh::RawMesh;

/// Mesh buffers suitable for GPU rendering.
///
/// Contains vertex attributes and indices in formats compatible with
/// WebGL/WebGPU.
///
/// # Examples
/// ```
/// use sphere_mesh::MeshBuilder;
///
/// let sphere = MeshBuilder::new(1.0, 4, 2, true, 2);
/// let buffers = sphere.buffers();
///
/// assert_eq!(buffers.positions.len(), 15 * 3);
/// assert_eq!(buffers.indices.len(), 8 * 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub positions: Vec<f32>,

    /// Vertex normals as flat array [nx, ny, nz, ...].
    pub normals: Vec<f32>,

    /// Texture coordinates as flat array [s, t, s, t, ...].
    pub tex_coords: Vec<f32>,

    /// Packed [x, y, z, nx, ny, nz, s, t] per vertex.
    pub interleaved: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,

    /// Wireframe segment endpoints as flat array [a, b, a, b, ...].
    pub line_indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrows a generated mesh into fixed-width buffers.
    pub fn from_raw(mesh: &RawMesh) -> Self {
        let positions = mesh
            .vertices()
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect();
        let normals = mesh
            .normals()
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect();
        let tex_coords = mesh
            .tex_coords()
            .iter()
            .flat_map(|t| [t.x as f32, t.y as f32])
            .collect();
        let interleaved = mesh.interleaved().iter().map(|&x| x as f32).collect();
        let indices = mesh.triangles().iter().flatten().copied().collect();
        let line_indices = mesh.lines().iter().flatten().copied().collect();

        Self {
            positions,
            normals,
            tex_coords,
            interleaved,
            indices,
            line_indices,
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of wireframe segments.
    pub fn line_count(&self) -> usize {
        self.line_indices.len() / 2
    }
}
