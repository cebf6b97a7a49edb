//! Smooth shading: every grid sample becomes one shared vertex.

use crate::mesh::RawMesh;
use crate::params::SphereParams;

use super::sample_grid;

/// Builds the shared-vertex sphere.
///
/// The normal of each vertex is its position scaled by `1 / radius`, which is
/// exact for a sphere centred at the origin. Triangles are emitted per sector
/// between adjacent rings:
///
/// ```text
///  k1--k1+1
///  |  / |
///  | /  |
///  k2--k2+1
/// ```
///
/// `(k1, k2, k1+1)` is skipped on the first stack and `(k1+1, k2, k2+1)` on
/// the last, since both would collapse onto a pole.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::tessellate::build_smooth;
/// use sphere_mesh::{SphereParams, SphereRequest};
///
/// let params = SphereParams::normalize(&SphereRequest::new(1.0, 4, 2, true, 2), 1.0);
/// let mesh = build_smooth(&params);
/// assert_eq!(mesh.vertex_count(), 15);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn build_smooth(params: &SphereParams) -> RawMesh {
    let sectors = params.sector_count();
    let stacks = params.stack_count();
    let length_inv = params.radius().recip();

    let grid = sample_grid(params.radius(), sectors, stacks);
    let triangle_count = 2 * (sectors as usize) * (stacks as usize - 1);
    let line_count = (sectors as usize) * (2 * stacks as usize - 1);
    let mut mesh = RawMesh::with_capacity(grid.len(), triangle_count, line_count);

    for sample in &grid {
        mesh.add_vertex(sample.position, sample.position * length_inv, sample.tex_coord);
    }

    for i in 0..stacks {
        let mut k1 = i * (sectors + 1); // beginning of current stack
        let mut k2 = k1 + sectors + 1; // beginning of next stack

        for _ in 0..sectors {
            if i != 0 {
                mesh.add_triangle(k1, k2, k1 + 1);
            }
            if i != stacks - 1 {
                mesh.add_triangle(k1 + 1, k2, k2 + 1);
            }

            // vertical lines for all stacks, horizontal lines except the first
            mesh.add_line(k1, k2);
            if i != 0 {
                mesh.add_line(k1, k1 + 1);
            }

            k1 += 1;
            k2 += 1;
        }
    }

    mesh
}
