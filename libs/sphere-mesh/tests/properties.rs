//! Whole-pipeline properties of the sphere tessellator.

use approx::{abs_diff_eq, assert_abs_diff_eq, assert_relative_eq};
use glam::DVec3;
use sphere_mesh::axis::remap_basis;
use sphere_mesh::normal::face_normal;
use sphere_mesh::{MeshBuilder, UpAxis};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every combination the property tests sweep over.
fn configurations() -> impl Iterator<Item = (i32, i32, bool, i32)> {
    let sectors = [3, 4, 7, 12, 36];
    let stacks = [2, 3, 5, 18];
    sectors.into_iter().flat_map(move |se| {
        stacks.into_iter().flat_map(move |st| {
            [true, false]
                .into_iter()
                .flat_map(move |smooth| (1..=3).map(move |axis| (se, st, smooth, axis)))
        })
    })
}

fn vec3(buffer: &[f32], index: u32) -> DVec3 {
    let i = index as usize * 3;
    DVec3::new(buffer[i] as f64, buffer[i + 1] as f64, buffer[i + 2] as f64)
}

#[test]
fn buffer_lengths_and_index_ranges_hold_for_all_configurations() {
    init_tracing();
    for (sectors, stacks, smooth, axis) in configurations() {
        let sphere = MeshBuilder::new(1.25, sectors, stacks, smooth, axis);
        let vertex_count = sphere.vertex_count();
        let label = format!("{sectors}x{stacks} smooth={smooth} axis={axis}");

        assert_eq!(sphere.positions().len(), 3 * vertex_count, "{label}");
        assert_eq!(sphere.normals().len(), 3 * vertex_count, "{label}");
        assert_eq!(sphere.tex_coords().len(), 2 * vertex_count, "{label}");
        assert_eq!(sphere.interleaved().len(), 8 * vertex_count, "{label}");
        assert_eq!(sphere.indices().len() % 3, 0, "{label}");
        assert_eq!(sphere.line_indices().len() % 2, 0, "{label}");

        let count = vertex_count as u32;
        assert!(sphere.indices().iter().all(|&i| i < count), "{label}");
        assert!(sphere.line_indices().iter().all(|&i| i < count), "{label}");
    }
}

#[test]
fn triangle_count_is_independent_of_shading() {
    for (sectors, stacks) in [(3, 2), (8, 3), (36, 18)] {
        let smooth = MeshBuilder::new(1.0, sectors, stacks, true, 2);
        let flat = MeshBuilder::new(1.0, sectors, stacks, false, 2);
        let expected = 2 * sectors as usize * (stacks as usize - 1);
        assert_eq!(smooth.triangle_count(), expected);
        assert_eq!(flat.triangle_count(), expected);
    }
}

#[test]
fn smooth_normals_are_unit_length() {
    for (sectors, stacks) in [(3, 2), (12, 7), (36, 18)] {
        for axis in 1..=3 {
            let sphere = MeshBuilder::new(3.0, sectors, stacks, true, axis);
            for n in sphere.normals().chunks_exact(3) {
                let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
                assert_abs_diff_eq!(length, 1.0f32, epsilon = 1e-5);
            }
        }
    }
}

#[test]
fn interleaved_buffer_matches_separate_buffers() {
    for (sectors, stacks, smooth, axis) in [(6, 4, true, 1), (5, 3, false, 3), (4, 2, true, 2)] {
        let sphere = MeshBuilder::new(2.0, sectors, stacks, smooth, axis);
        for (i, vertex) in sphere.interleaved().chunks_exact(8).enumerate() {
            assert_eq!(vertex[0..3], sphere.positions()[i * 3..i * 3 + 3]);
            assert_eq!(vertex[3..6], sphere.normals()[i * 3..i * 3 + 3]);
            assert_eq!(vertex[6..8], sphere.tex_coords()[i * 2..i * 2 + 2]);
        }
    }
}

#[test]
fn configure_twice_is_byte_identical() {
    let mut sphere = MeshBuilder::new(1.0, 20, 10, true, 3);
    let before = sphere.buffers().clone();
    sphere.configure(1.0, 20, 10, true, 3);
    assert_eq!(sphere.buffers(), &before);

    let bits = |values: &[f32]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(sphere.positions()), bits(&before.positions));
    assert_eq!(bits(sphere.interleaved()), bits(&before.interleaved));
}

#[test]
fn minimum_counts_clamp_law() {
    let clamped = MeshBuilder::new(2.0, 1, 1, true, 2);
    let explicit = MeshBuilder::new(2.0, 3, 2, true, 2);
    assert_eq!(clamped.buffers(), explicit.buffers());
}

#[test]
fn negative_radius_leaves_radius_unchanged() {
    let mut sphere = MeshBuilder::new(0.75, 36, 18, true, 2);
    sphere.configure(-5.0, 36, 18, true, 2);
    assert_eq!(sphere.radius(), 0.75);
}

#[test]
fn axis_remap_round_trip_restores_y_up_positions() {
    let y_up = MeshBuilder::new(1.5, 12, 6, true, 2);
    let mut sphere = MeshBuilder::new(1.5, 12, 6, true, 1);
    assert_ne!(sphere.positions(), y_up.positions());

    sphere.configure(1.5, 12, 6, true, 2);
    for (a, b) in sphere.positions().iter().zip(y_up.positions()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
    }
}

#[test]
fn remapped_mesh_is_the_rotated_y_up_mesh() {
    for (axis, target) in [(1, UpAxis::X), (3, UpAxis::Z)] {
        for smooth in [true, false] {
            let y_up = MeshBuilder::new(2.0, 8, 5, smooth, 2);
            let remapped = MeshBuilder::new(2.0, 8, 5, smooth, axis);
            let forward = remap_basis(UpAxis::Y, target).unwrap();
            let back = remap_basis(target, UpAxis::Y).unwrap();

            let pairs = y_up.raw().vertices().iter().zip(remapped.raw().vertices());
            for (original, rotated) in pairs {
                assert_eq!(forward * *original, *rotated);
                let restored = back * *rotated;
                assert_relative_eq!(restored.x, original.x, epsilon = 1e-12);
                assert_relative_eq!(restored.y, original.y, epsilon = 1e-12);
                assert_relative_eq!(restored.z, original.z, epsilon = 1e-12);
            }
            for (original, rotated) in y_up.raw().normals().iter().zip(remapped.raw().normals()) {
                assert_eq!(forward * *original, *rotated);
            }
            assert_eq!(y_up.tex_coords(), remapped.tex_coords());
            assert_eq!(y_up.indices(), remapped.indices());
            assert_eq!(y_up.line_indices(), remapped.line_indices());
        }
    }
}

#[test]
fn winding_agrees_with_normals() {
    for (sectors, stacks, smooth, axis) in configurations() {
        let sphere = MeshBuilder::new(1.0, sectors, stacks, smooth, axis);
        for tri in sphere.indices().chunks_exact(3) {
            let (a, b, c) = (
                vec3(sphere.positions(), tri[0]),
                vec3(sphere.positions(), tri[1]),
                vec3(sphere.positions(), tri[2]),
            );
            let area_normal = (b - a).cross(c - a);
            if area_normal.length() < 1e-9 {
                continue;
            }
            let vertex_normals = vec3(sphere.normals(), tri[0])
                + vec3(sphere.normals(), tri[1])
                + vec3(sphere.normals(), tri[2]);
            assert!(
                area_normal.dot(vertex_normals) > 0.0,
                "{sectors}x{stacks} smooth={smooth} axis={axis} triangle {tri:?}"
            );
        }
    }
}

#[test]
fn small_smooth_sphere_has_hand_derived_topology() {
    let sphere = MeshBuilder::new(1.0, 4, 2, true, 2);

    assert_eq!(sphere.vertex_count(), (2 + 1) * (4 + 1));
    assert_eq!(sphere.triangle_count(), 2 * 4 * (2 - 1));
    assert_eq!(sphere.line_count(), 4 * 2 + 4 * (2 - 1));
    assert_eq!(sphere.positions().len(), 45);
    assert_eq!(sphere.tex_coords().len(), 30);
    assert_eq!(sphere.interleaved().len(), 120);

    // first and third index swapped on every triangle
    assert_eq!(
        sphere.indices(),
        &[
            6, 5, 1, 7, 6, 2, 8, 7, 3, 9, 8, 4, //
            6, 10, 5, 7, 11, 6, 8, 12, 7, 9, 13, 8,
        ]
    );
    assert_eq!(
        sphere.line_indices(),
        &[
            0, 5, 1, 6, 2, 7, 3, 8, //
            5, 10, 5, 6, 6, 11, 6, 7, 7, 12, 7, 8, 8, 13, 8, 9,
        ]
    );
}

#[test]
fn smooth_normals_are_negated_radial_directions() {
    let sphere = MeshBuilder::new(2.0, 6, 4, true, 2);
    for (v, n) in sphere.raw().vertices().iter().zip(sphere.raw().normals()) {
        let expected = -*v / 2.0;
        assert_relative_eq!(n.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(n.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(n.z, expected.z, epsilon = 1e-12);
    }
}

#[test]
fn flat_two_stack_sphere_has_one_normal_per_triangle() {
    let sectors = 7;
    let sphere = MeshBuilder::new(1.0, sectors, 2, false, 2);
    assert_eq!(sphere.triangle_count(), 2 * sectors as usize);
    assert_eq!(sphere.vertex_count(), 3 * sphere.triangle_count());

    for tri in sphere.indices().chunks_exact(3) {
        let n = vec3(sphere.normals(), tri[0]);
        assert_eq!(vec3(sphere.normals(), tri[1]), n);
        assert_eq!(vec3(sphere.normals(), tri[2]), n);
        assert!(abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6));
    }
}

#[test]
fn vertices_lie_on_the_sphere() {
    for smooth in [true, false] {
        let sphere = MeshBuilder::new(4.0, 16, 9, smooth, 3);
        for v in sphere.raw().vertices() {
            assert_relative_eq!(v.length(), 4.0, epsilon = 1e-12);
        }
        let (min, max) = sphere.raw().bounding_box();
        assert!(min.cmpge(DVec3::splat(-4.0 - 1e-9)).all());
        assert!(max.cmple(DVec3::splat(4.0 + 1e-9)).all());
    }
}

#[test]
fn collinear_points_have_zero_face_normal() {
    let n = face_normal(
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(2.0, 4.0, 6.0),
    );
    assert_eq!(n, DVec3::ZERO);
}
