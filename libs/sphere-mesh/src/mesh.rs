//! # Raw Mesh
//!
//! Growable, f64 generation-phase mesh: positions, normals, texture
//! coordinates, triangles, wireframe lines and the interleaved V/N/T array.
//!
//! All geometry calculations use f64. Narrowing to f32 happens once, in
//! [`crate::buffers::MeshBuffers`], after generation is complete.

use config::constants::INTERLEAVED_COMPONENTS;
use glam::{DVec2, DVec3};

/// A triangle mesh under construction.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use sphere_mesh::RawMesh;
///
/// let mut mesh = RawMesh::new();
/// mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
/// mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::X);
/// mesh.add_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMesh {
    /// Vertex positions
    pub(crate) vertices: Vec<DVec3>,
    /// One normal per vertex
    pub(crate) normals: Vec<DVec3>,
    /// One (s, t) pair per vertex
    pub(crate) tex_coords: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    pub(crate) triangles: Vec<[u32; 3]>,
    /// Wireframe segments
    pub(crate) lines: Vec<[u32; 2]>,
    /// Packed (x, y, z, nx, ny, nz, s, t) per vertex
    pub(crate) interleaved: Vec<f64>,
}

impl RawMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize, line_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            tex_coords: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            lines: Vec::with_capacity(line_count),
            interleaved: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of wireframe segments.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its normal and texture coordinate, returning its index.
    ///
    /// Indices are `u32`; a mesh holds at most `u32::MAX + 1` vertices.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, tex_coord: DVec2) -> u32 {
        let index = vertex_index(self.vertices.len());
        self.vertices.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a wireframe segment by vertex indices.
    pub fn add_line(&mut self, v0: u32, v1: u32) {
        self.lines.push([v0, v1]);
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn tex_coords(&self) -> &[DVec2] {
        &self.tex_coords
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns a reference to the wireframe segments.
    #[inline]
    pub fn lines(&self) -> &[[u32; 2]] {
        &self.lines
    }

    /// Returns the interleaved V/N/T array; empty until
    /// [`RawMesh::build_interleaved`] has run.
    #[inline]
    pub fn interleaved(&self) -> &[f64] {
        &self.interleaved
    }

    /// Generates the interleaved vertex array from the per-attribute arrays.
    ///
    /// Layout per vertex: position, normal, texture coordinate.
    pub fn build_interleaved(&mut self) {
        let mut interleaved = Vec::with_capacity(self.vertices.len() * INTERLEAVED_COMPONENTS);
        for ((v, n), t) in self.vertices.iter().zip(&self.normals).zip(&self.tex_coords) {
            interleaved.extend_from_slice(&[v.x, v.y, v.z, n.x, n.y, n.z, t.x, t.y]);
        }
        self.interleaved = interleaved;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Writes position and normal of vertex `index` back into the
    /// interleaved array, if it has been built.
    pub(crate) fn sync_interleaved(&mut self, index: usize) {
        let base = index * INTERLEAVED_COMPONENTS;
        if let Some(slot) = self.interleaved.get_mut(base..base + 6) {
            let v = self.vertices[index];
            let n = self.normals[index];
            slot.copy_from_slice(&[v.x, v.y, v.z, n.x, n.y, n.z]);
        }
    }
}

fn vertex_index(len: usize) -> u32 {
    debug_assert!(
        u32::try_from(len).is_ok(),
        "vertex index {len} exceeds the u32 index range"
    );
    len as u32
}
