//! # Post-Processing
//!
//! Steps shared by both shading modes once the raw arrays exist: normal and
//! winding reversal, then the optional up-axis remap. Both keep the
//! interleaved array in step with the per-attribute arrays.

use crate::axis::{AxisRemap, UpAxis};
use crate::mesh::RawMesh;

impl RawMesh {
    /// Flips every normal to the opposite direction and reverses the winding
    /// of every triangle by swapping its first and third index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::{DVec2, DVec3};
    /// use sphere_mesh::RawMesh;
    ///
    /// let mut mesh = RawMesh::new();
    /// for p in [DVec3::ZERO, DVec3::X, DVec3::Y] {
    ///     mesh.add_vertex(p, DVec3::NEG_Z, DVec2::ZERO);
    /// }
    /// mesh.add_triangle(0, 1, 2);
    /// mesh.reverse_normals();
    /// assert_eq!(mesh.triangles(), &[[2, 1, 0]]);
    /// assert_eq!(mesh.normals()[0], DVec3::Z);
    /// ```
    pub fn reverse_normals(&mut self) {
        for index in 0..self.normals.len() {
            self.normals[index] = -self.normals[index];
            self.sync_interleaved(index);
        }

        for tri in &mut self.triangles {
            tri.swap(0, 2);
        }
    }

    /// Rotates positions and normals from `from`-up to `to`-up.
    ///
    /// Texture coordinates and topology are untouched. Does nothing when
    /// `from == to`.
    pub fn change_up_axis(&mut self, from: UpAxis, to: UpAxis) {
        let Some(remap) = AxisRemap::new(from, to) else {
            return;
        };
        tracing::trace!(%from, %to, vertices = self.vertices.len(), "remapping up axis");

        for index in 0..self.vertices.len() {
            self.vertices[index] = remap.apply(self.vertices[index]);
            self.normals[index] = remap.apply(self.normals[index]);
            self.sync_interleaved(index);
        }
    }
}
