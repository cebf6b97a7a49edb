//! Flat shading: every face owns its vertices so it can carry one normal.

use crate::mesh::RawMesh;
use crate::normal::face_normal;
use crate::params::SphereParams;

use super::{sample_grid, GridSample};

/// Builds the duplicated-vertex sphere.
///
/// For each sector cell the four grid samples are
///
/// ```text
///  v1--v3
///  |    |
///  v2--v4
/// ```
///
/// The first stack emits one triangle `(v1, v2, v4)`, the last stack one
/// triangle `(v1, v2, v3)`, and every other stack a quad `(v1, v2, v3, v4)`
/// split into local triangles `(0, 1, 2)` and `(2, 1, 3)`. A quad shares the
/// face normal of `v1, v2, v3`; `v4` does not contribute.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::tessellate::build_flat;
/// use sphere_mesh::{SphereParams, SphereRequest};
///
/// let params = SphereParams::normalize(&SphereRequest::new(1.0, 6, 2, false, 2), 1.0);
/// let mesh = build_flat(&params);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert_eq!(mesh.vertex_count(), 36);
/// ```
pub fn build_flat(params: &SphereParams) -> RawMesh {
    let sectors = params.sector_count() as usize;
    let stacks = params.stack_count() as usize;
    let grid = sample_grid(params.radius(), params.sector_count(), params.stack_count());

    let interior = stacks - 2;
    let vertex_count = 2 * 3 * sectors + 4 * sectors * interior;
    let triangle_count = 2 * sectors * (stacks - 1);
    let line_count = sectors * (1 + 2 * (stacks - 1));
    let mut mesh = RawMesh::with_capacity(vertex_count, triangle_count, line_count);

    let mut index: u32 = 0;
    for i in 0..stacks {
        let mut vi1 = i * (sectors + 1); // index into grid
        let mut vi2 = (i + 1) * (sectors + 1);

        for _ in 0..sectors {
            let v1 = grid[vi1];
            let v2 = grid[vi2];
            let v3 = grid[vi1 + 1];
            let v4 = grid[vi2 + 1];

            if i == 0 {
                // first stack: one triangle, vertical line only
                emit_face(&mut mesh, &[v1, v2, v4]);
                mesh.add_triangle(index, index + 1, index + 2);
                mesh.add_line(index, index + 1);
                index += 3;
            } else if i == stacks - 1 {
                // last stack: one triangle
                emit_face(&mut mesh, &[v1, v2, v3]);
                mesh.add_triangle(index, index + 1, index + 2);
                mesh.add_line(index, index + 1);
                mesh.add_line(index, index + 2);
                index += 3;
            } else {
                emit_face(&mut mesh, &[v1, v2, v3, v4]);
                mesh.add_triangle(index, index + 1, index + 2);
                mesh.add_triangle(index + 2, index + 1, index + 3);
                mesh.add_line(index, index + 1);
                mesh.add_line(index, index + 2);
                index += 4;
            }

            vi1 += 1;
            vi2 += 1;
        }
    }

    mesh
}

/// Emits fresh vertices for one face, all sharing the normal of its first
/// three corners.
fn emit_face(mesh: &mut RawMesh, corners: &[GridSample]) {
    let normal = face_normal(corners[0].position, corners[1].position, corners[2].position);
    for corner in corners {
        mesh.add_vertex(corner.position, normal, corner.tex_coord);
    }
}
