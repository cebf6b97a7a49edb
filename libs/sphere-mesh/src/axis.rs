//! # Up-Axis Remapping
//!
//! The tessellator always generates the sphere in its default orientation and
//! then rotates it onto the requested up axis. Rotations are 90° axis swaps,
//! so every basis is a fixed ±1/0 matrix looked up by `(from, to)` pair.

use std::fmt;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// World axis the sphere's poles are aligned with.
///
/// The numeric codes (`X = 1`, `Y = 2`, `Z = 3`) are the ones accepted by
/// `MeshBuilder::configure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpAxis {
    /// +X up
    X = 1,
    /// +Y up
    #[default]
    Y = 2,
    /// +Z up
    Z = 3,
}

impl UpAxis {
    /// All axes, in code order.
    pub const ALL: [UpAxis; 3] = [UpAxis::X, UpAxis::Y, UpAxis::Z];

    /// Returns the numeric code of this axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sphere_mesh::UpAxis;
    ///
    /// assert_eq!(UpAxis::Z.code(), 3);
    /// ```
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Decodes an axis code, falling back to [`UpAxis::Y`] for anything
    /// outside `1..=3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sphere_mesh::UpAxis;
    ///
    /// assert_eq!(UpAxis::from_code_or_default(1), UpAxis::X);
    /// assert_eq!(UpAxis::from_code_or_default(7), UpAxis::Y);
    /// ```
    pub fn from_code_or_default(code: i32) -> Self {
        Self::try_from(code).unwrap_or_default()
    }
}

impl TryFrom<i32> for UpAxis {
    type Error = MeshError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(UpAxis::X),
            2 => Ok(UpAxis::Y),
            3 => Ok(UpAxis::Z),
            other => Err(MeshError::InvalidUpAxis(other)),
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpAxis::X => "X",
            UpAxis::Y => "Y",
            UpAxis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Basis columns `[tx, ty, tz]` for each `(from, to)` pair.
const REMAP_TABLE: [((UpAxis, UpAxis), [[f64; 3]; 3]); 6] = [
    (
        (UpAxis::X, UpAxis::Y),
        [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    ),
    (
        (UpAxis::X, UpAxis::Z),
        [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]],
    ),
    (
        (UpAxis::Y, UpAxis::X),
        [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    ),
    (
        (UpAxis::Y, UpAxis::Z),
        [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]],
    ),
    (
        (UpAxis::Z, UpAxis::X),
        [[0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
    ),
    (
        (UpAxis::Z, UpAxis::Y),
        [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
    ),
];

/// Looks up the rotation taking `from`-up geometry to `to`-up geometry.
///
/// Returns `None` when `from == to`; there is nothing to rotate.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sphere_mesh::axis::{remap_basis, UpAxis};
///
/// let basis = remap_basis(UpAxis::Y, UpAxis::X).unwrap();
/// assert_eq!(basis * DVec3::new(1.0, 2.0, 3.0), DVec3::new(2.0, -1.0, 3.0));
/// assert!(remap_basis(UpAxis::Z, UpAxis::Z).is_none());
/// ```
pub fn remap_basis(from: UpAxis, to: UpAxis) -> Option<DMat3> {
    REMAP_TABLE
        .iter()
        .find(|(key, _)| *key == (from, to))
        .map(|(_, cols)| DMat3::from_cols_array_2d(cols))
}

/// A resolved remap that can be applied to positions and normals alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRemap {
    basis: DMat3,
}

impl AxisRemap {
    /// Resolves the remap for `from → to`, or `None` when no rotation applies.
    pub fn new(from: UpAxis, to: UpAxis) -> Option<Self> {
        remap_basis(from, to).map(|basis| Self { basis })
    }

    /// Returns the basis matrix; its columns are `tx`, `ty`, `tz`.
    #[inline]
    pub fn basis(&self) -> DMat3 {
        self.basis
    }

    /// Applies the remap: `tx * v.x + ty * v.y + tz * v.z`.
    #[inline]
    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.basis * v
    }
}
