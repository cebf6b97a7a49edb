//! # Face Normals

use config::constants::FACE_NORMAL_EPSILON;
use glam::DVec3;

/// Returns the unit normal of triangle `v1-v2-v3`, i.e. the normalized
/// `(v2 - v1) × (v3 - v1)`.
///
/// A triangle with no surface (normal length at or below
/// [`FACE_NORMAL_EPSILON`]) yields the zero vector, never NaN.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sphere_mesh::normal::face_normal;
///
/// let n = face_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
///
/// let collinear = face_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
/// assert_eq!(collinear, DVec3::ZERO);
/// ```
pub fn face_normal(v1: DVec3, v2: DVec3, v3: DVec3) -> DVec3 {
    let normal = (v2 - v1).cross(v3 - v1);
    let length = normal.length();
    if length > FACE_NORMAL_EPSILON {
        normal / length
    } else {
        DVec3::ZERO
    }
}
