//! # Tessellation
//!
//! Latitude/longitude sampling of the sphere and the two meshing strategies
//! built on it.
//!
//! Sampling uses the parametric equation
//!
//! ```text
//! x = r * cos(u) * cos(v)
//! y = r * cos(u) * sin(v)
//! z = r * sin(u)
//! ```
//!
//! where `u` is the stack (latitude) angle, from +90° at ring 0 down to -90°
//! at ring `stack_count`, and `v` is the sector (longitude) angle from 0° to
//! 360°. Each ring holds `sector_count + 1` samples: the first and last share
//! a position but not a texture coordinate.

pub mod flat;
pub mod smooth;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, DVec3};

pub use flat::build_flat;
pub use smooth::build_smooth;

/// One point of the latitude/longitude grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    /// Position on the sphere surface
    pub position: DVec3,
    /// Texture coordinate `(j / sectors, i / stacks)`
    pub tex_coord: DVec2,
}

/// Samples the full grid ring by ring, north pole first.
///
/// Returns `(stack_count + 1) * (sector_count + 1)` samples; sample `(i, j)`
/// lives at `i * (sector_count + 1) + j`.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::tessellate::sample_grid;
///
/// let grid = sample_grid(1.0, 4, 2);
/// assert_eq!(grid.len(), 15);
/// assert_eq!(grid[0].position.z, 1.0);
/// ```
pub fn sample_grid(radius: f64, sector_count: u32, stack_count: u32) -> Vec<GridSample> {
    let sector_step = TAU / sector_count as f64;
    let stack_step = PI / stack_count as f64;
    let mut samples =
        Vec::with_capacity((stack_count as usize + 1) * (sector_count as usize + 1));

    for i in 0..=stack_count {
        let stack_angle = FRAC_PI_2 - i as f64 * stack_step;
        let xy = radius * stack_angle.cos();
        let z = radius * stack_angle.sin();

        for j in 0..=sector_count {
            let sector_angle = j as f64 * sector_step;
            samples.push(GridSample {
                position: DVec3::new(xy * sector_angle.cos(), xy * sector_angle.sin(), z),
                tex_coord: DVec2::new(
                    j as f64 / sector_count as f64,
                    i as f64 / stack_count as f64,
                ),
            });
        }
    }

    samples
}
