//! # Sphere Parameters
//!
//! Raw requests and the normalized parameters the tessellator actually uses.
//!
//! Invalid inputs are never rejected by the builder. [`SphereParams::normalize`]
//! applies the clamp-and-default policy in one place:
//!
//! - a radius that is not a positive finite number keeps the previous radius
//! - sector counts below 3 become 3
//! - stack counts below 2 become 2
//! - up-axis codes outside `1..=3` become Y

use config::constants::{SphereDefaults, DEFAULT_RADIUS, MIN_SECTOR_COUNT, MIN_STACK_COUNT};
use serde::{Deserialize, Serialize};

use crate::axis::UpAxis;
use crate::error::MeshError;

/// Un-normalized sphere inputs, exactly as a caller supplied them.
///
/// Missing JSON fields take the workspace defaults.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::SphereRequest;
///
/// let request = SphereRequest::from_json(r#"{ "radius": 2.5, "sectors": 1 }"#).unwrap();
/// assert_eq!(request.radius, 2.5);
/// assert_eq!(request.sectors, 1);
/// assert_eq!(request.stacks, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereRequest {
    /// Requested radius
    pub radius: f64,
    /// Requested longitude divisions
    pub sectors: i32,
    /// Requested latitude divisions
    pub stacks: i32,
    /// Smooth (`true`) or flat (`false`) shading
    pub smooth: bool,
    /// Up-axis code: 1 = X, 2 = Y, 3 = Z
    pub up_axis: i32,
}

impl Default for SphereRequest {
    fn default() -> Self {
        SphereDefaults::default().into()
    }
}

impl From<SphereDefaults> for SphereRequest {
    fn from(defaults: SphereDefaults) -> Self {
        Self {
            radius: defaults.radius,
            sectors: defaults.sector_count,
            stacks: defaults.stack_count,
            smooth: defaults.smooth,
            up_axis: defaults.up_axis,
        }
    }
}

impl SphereRequest {
    /// Creates a request from positional arguments.
    pub fn new(radius: f64, sectors: i32, stacks: i32, smooth: bool, up_axis: i32) -> Self {
        Self {
            radius,
            sectors,
            stacks,
            smooth,
            up_axis,
        }
    }

    /// Decodes a request from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidRequest`] when the text is not a JSON object
    /// with fields of the expected types.
    pub fn from_json(json: &str) -> Result<Self, MeshError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Normalized sphere parameters. Every value here is valid for tessellation.
///
/// Only [`SphereParams::normalize`] constructs these, so the type serializes
/// but never deserializes; decode a [`SphereRequest`] and normalize it instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereParams {
    radius: f64,
    sector_count: u32,
    stack_count: u32,
    smooth: bool,
    up_axis: UpAxis,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self::normalize(&SphereRequest::default(), DEFAULT_RADIUS)
    }
}

impl SphereParams {
    /// Applies the clamp-and-default policy to a request.
    ///
    /// `previous_radius` is kept when the requested radius is not a positive
    /// finite number. Infinite radii are rejected along with zero, negative
    /// and NaN ones, even though they compare greater than zero: an infinite
    /// sphere has no finite vertex positions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sphere_mesh::{SphereParams, SphereRequest, UpAxis};
    ///
    /// let params = SphereParams::normalize(&SphereRequest::new(-5.0, 1, 1, true, 9), 4.0);
    /// assert_eq!(params.radius(), 4.0);
    /// assert_eq!(params.sector_count(), 3);
    /// assert_eq!(params.stack_count(), 2);
    /// assert_eq!(params.up_axis(), UpAxis::Y);
    /// ```
    pub fn normalize(request: &SphereRequest, previous_radius: f64) -> Self {
        let radius = if request.radius.is_finite() && request.radius > 0.0 {
            request.radius
        } else {
            tracing::debug!(
                requested = request.radius,
                kept = previous_radius,
                "ignoring non-positive sphere radius"
            );
            previous_radius
        };

        let sector_count = clamp_count(request.sectors, MIN_SECTOR_COUNT, "sectors");
        let stack_count = clamp_count(request.stacks, MIN_STACK_COUNT, "stacks");

        let up_axis = UpAxis::from_code_or_default(request.up_axis);
        if up_axis.code() != request.up_axis {
            tracing::debug!(requested = request.up_axis, "unknown up axis code, using Y");
        }

        Self {
            radius,
            sector_count,
            stack_count,
            smooth: request.smooth,
            up_axis,
        }
    }

    /// Converts back into a request carrying these (already valid) values.
    pub fn to_request(&self) -> SphereRequest {
        SphereRequest {
            radius: self.radius,
            sectors: i32::try_from(self.sector_count).unwrap_or(i32::MAX),
            stacks: i32::try_from(self.stack_count).unwrap_or(i32::MAX),
            smooth: self.smooth,
            up_axis: self.up_axis.code(),
        }
    }

    /// Sphere radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Longitude divisions (at least 3).
    #[inline]
    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Latitude divisions (at least 2).
    #[inline]
    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Whether vertices are shared between faces.
    #[inline]
    pub fn smooth(&self) -> bool {
        self.smooth
    }

    /// Axis the poles end up aligned with.
    #[inline]
    pub fn up_axis(&self) -> UpAxis {
        self.up_axis
    }
}

fn clamp_count(requested: i32, min: i32, field: &'static str) -> u32 {
    if requested < min {
        tracing::debug!(field, requested, min, "clamping tessellation count");
    }
    // `min` is positive, so the clamped value always fits.
    requested.max(min).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_through() {
        let params = SphereParams::normalize(&SphereRequest::new(2.5, 24, 12, false, 3), 1.0);
        assert_eq!(params.radius(), 2.5);
        assert_eq!(params.sector_count(), 24);
        assert_eq!(params.stack_count(), 12);
        assert!(!params.smooth());
        assert_eq!(params.up_axis(), UpAxis::Z);
    }

    #[test]
    fn test_counts_are_clamped_to_minimums() {
        let params = SphereParams::normalize(&SphereRequest::new(1.0, 1, 1, true, 2), 1.0);
        let expected = SphereParams::normalize(&SphereRequest::new(1.0, 3, 2, true, 2), 1.0);
        assert_eq!(params, expected);
    }

    #[test]
    fn test_negative_counts_are_clamped() {
        let params = SphereParams::normalize(&SphereRequest::new(1.0, -40, i32::MIN, true, 2), 1.0);
        assert_eq!(params.sector_count(), 3);
        assert_eq!(params.stack_count(), 2);
    }

    #[test]
    fn test_minimum_counts_are_kept() {
        let params = SphereParams::normalize(&SphereRequest::new(1.0, 3, 2, true, 2), 1.0);
        assert_eq!(params.sector_count(), 3);
        assert_eq!(params.stack_count(), 2);
    }

    #[test]
    fn test_non_positive_radius_keeps_previous() {
        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = SphereParams::normalize(&SphereRequest::new(radius, 36, 18, true, 2), 7.0);
            assert_eq!(params.radius(), 7.0, "radius {radius}");
        }
    }

    #[test]
    fn test_invalid_axis_defaults_to_y() {
        for code in [0, 4, -1, i32::MAX] {
            let params = SphereParams::normalize(&SphereRequest::new(1.0, 36, 18, true, code), 1.0);
            assert_eq!(params.up_axis(), UpAxis::Y, "code {code}");
        }
    }

    #[test]
    fn test_to_request_round_trips() {
        let params = SphereParams::normalize(&SphereRequest::new(3.0, 10, 5, false, 1), 1.0);
        assert_eq!(SphereParams::normalize(&params.to_request(), 99.0), params);
    }

    #[test]
    fn test_default_params() {
        let params = SphereParams::default();
        assert_eq!(params.radius(), 1.0);
        assert_eq!(params.sector_count(), 36);
        assert_eq!(params.stack_count(), 18);
        assert!(params.smooth());
        assert_eq!(params.up_axis(), UpAxis::Y);
    }

    #[test]
    fn test_request_from_json_uses_defaults() {
        let request = SphereRequest::from_json(r#"{ "smooth": false, "up_axis": 1 }"#).unwrap();
        assert_eq!(request.radius, 1.0);
        assert_eq!(request.sectors, 36);
        assert!(!request.smooth);
        assert_eq!(request.up_axis, 1);
    }

    #[test]
    fn test_request_from_json_rejects_garbage() {
        let err = SphereRequest::from_json("{ \"radius\": \"big\" }").unwrap_err();
        assert!(matches!(err, MeshError::InvalidRequest { .. }));
        assert!(SphereRequest::from_json("not json").is_err());
    }

    #[test]
    fn test_out_of_range_json_is_normalized_before_tessellation() {
        let json = r#"{ "radius": -1.0, "sectors": 0, "stacks": 1, "smooth": false, "up_axis": 0 }"#;
        let params = SphereParams::normalize(&SphereRequest::from_json(json).unwrap(), 2.0);
        assert_eq!(params.radius(), 2.0);
        assert_eq!(params.sector_count(), 3);
        assert_eq!(params.stack_count(), 2);
        assert_eq!(params.up_axis(), UpAxis::Y);

        let flat = crate::tessellate::build_flat(&params);
        assert_eq!(flat.triangle_count(), 6);
        let smooth = crate::tessellate::build_smooth(&params);
        assert_eq!(smooth.triangle_count(), 6);

        let zero_stacks = r#"{ "stacks": 0, "sectors": -7 }"#;
        let params = SphereParams::normalize(&SphereRequest::from_json(zero_stacks).unwrap(), 1.0);
        assert_eq!(crate::tessellate::build_smooth(&params).vertex_count(), 3 * 4);
    }

    #[test]
    fn test_infinite_radius_is_rejected() {
        let params = SphereParams::normalize(&SphereRequest::new(f64::INFINITY, 8, 4, true, 2), 1.5);
        assert_eq!(params.radius(), 1.5);
    }

    #[test]
    fn test_params_serialize_with_normalized_values() {
        let params = SphereParams::normalize(&SphereRequest::new(0.0, 1, 1, true, 3), 1.0);
        let value = serde_json::to_value(params).unwrap();
        assert_eq!(value["sector_count"], 3);
        assert_eq!(value["stack_count"], 2);
        assert_eq!(value["up_axis"], "Z");
    }
}
