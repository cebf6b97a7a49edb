//! # Mesh Builder
//!
//! Owns a sphere's parameters and every buffer derived from them.
//!
//! Each call to [`MeshBuilder::configure`] runs the full pipeline from
//! scratch:
//!
//! ```text
//! normalize → smooth | flat tessellation → interleave
//!           → reverse normals and winding → up-axis remap → f32/u32 export
//! ```
//!
//! Nothing carries over between calls except the last accepted radius, which
//! is kept when a request brings a non-positive one.

use std::fmt;

use config::constants::{SphereDefaults, INTERLEAVED_STRIDE_BYTES};

use crate::axis::UpAxis;
use crate::buffers::MeshBuffers;
use crate::error::MeshError;
use crate::mesh::RawMesh;
use crate::params::{SphereParams, SphereRequest};
use crate::tessellate::{build_flat, build_smooth};

/// Parametric sphere tessellation engine.
///
/// Accessors return views that stay valid until the next reconfiguration;
/// `configure` takes `&mut self`, so the borrow checker enforces that.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::MeshBuilder;
///
/// let mut sphere = MeshBuilder::new(1.0, 4, 2, true, 2);
/// assert_eq!(sphere.vertex_count(), 15);
/// assert_eq!(sphere.triangle_count(), 8);
///
/// // out-of-range inputs are clamped, never rejected
/// sphere.configure(-3.0, 1, 1, false, 9);
/// assert_eq!(sphere.radius(), 1.0);
/// assert_eq!(sphere.sector_count(), 3);
/// assert_eq!(sphere.stack_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    params: SphereParams,
    raw: RawMesh,
    buffers: MeshBuffers,
}

impl Default for MeshBuilder {
    /// Radius 1, 36 sectors, 18 stacks, smooth, Y up.
    fn default() -> Self {
        Self::from_defaults(SphereDefaults::default())
    }
}

impl MeshBuilder {
    /// Creates a builder and performs the initial configuration.
    ///
    /// A non-positive first radius falls back to
    /// [`config::constants::DEFAULT_RADIUS`].
    pub fn new(radius: f64, sectors: i32, stacks: i32, smooth: bool, up_axis: i32) -> Self {
        Self::from_request(&SphereRequest::new(radius, sectors, stacks, smooth, up_axis))
    }

    /// Creates a smooth, Y-up builder, refusing values that
    /// [`MeshBuilder::new`] would silently correct.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidDefaults`] for a radius that is not a
    /// positive finite number, fewer than 3 sectors or fewer than 2 stacks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sphere_mesh::MeshBuilder;
    ///
    /// assert!(MeshBuilder::try_new(1.0, 1, 2).is_err());
    /// let sphere = MeshBuilder::try_new(2.0, 3, 2).unwrap();
    /// assert_eq!(sphere.radius(), 2.0);
    /// ```
    pub fn try_new(radius: f64, sectors: i32, stacks: i32) -> Result<Self, MeshError> {
        let defaults = SphereDefaults::new(radius, sectors, stacks)?;
        Ok(Self::from_defaults(defaults))
    }

    /// Creates a builder from a validated defaults snapshot.
    pub fn from_defaults(defaults: SphereDefaults) -> Self {
        Self::from_request(&defaults.into())
    }

    /// Creates a builder from a request.
    pub fn from_request(request: &SphereRequest) -> Self {
        let mut builder = Self {
            params: SphereParams::default(),
            raw: RawMesh::new(),
            buffers: MeshBuffers::new(),
        };
        builder.configure_request(request);
        builder
    }

    /// Rebuilds every derived array from the given parameters.
    ///
    /// Inputs are normalized first: a radius that is not positive keeps the
    /// previous one, sectors below 3 become 3, stacks below 2 become 2 and an
    /// up-axis code outside `1..=3` becomes Y.
    pub fn configure(&mut self, radius: f64, sectors: i32, stacks: i32, smooth: bool, up_axis: i32) {
        self.configure_request(&SphereRequest::new(radius, sectors, stacks, smooth, up_axis));
    }

    /// Same as [`MeshBuilder::configure`], taking the inputs as a request.
    pub fn configure_request(&mut self, request: &SphereRequest) {
        let params = SphereParams::normalize(request, self.params.radius());

        let mut raw = if params.smooth() {
            build_smooth(&params)
        } else {
            build_flat(&params)
        };
        raw.build_interleaved();
        raw.reverse_normals();
        if params.up_axis() != UpAxis::Y {
            raw.change_up_axis(UpAxis::Y, params.up_axis());
        }

        self.buffers = MeshBuffers::from_raw(&raw);
        self.raw = raw;
        self.params = params;

        tracing::debug!(
            radius = params.radius(),
            sectors = params.sector_count(),
            stacks = params.stack_count(),
            smooth = params.smooth(),
            up_axis = %params.up_axis(),
            vertices = self.vertex_count(),
            triangles = self.triangle_count(),
            "sphere mesh rebuilt"
        );
    }

    /// Changes the radius, keeping every other parameter.
    pub fn set_radius(&mut self, radius: f64) {
        let request = SphereRequest {
            radius,
            ..self.params.to_request()
        };
        self.configure_request(&request);
    }

    /// Changes the sector count, keeping every other parameter.
    pub fn set_sector_count(&mut self, sectors: i32) {
        let request = SphereRequest {
            sectors,
            ..self.params.to_request()
        };
        self.configure_request(&request);
    }

    /// Changes the stack count, keeping every other parameter.
    pub fn set_stack_count(&mut self, stacks: i32) {
        let request = SphereRequest {
            stacks,
            ..self.params.to_request()
        };
        self.configure_request(&request);
    }

    /// Switches between smooth and flat shading.
    pub fn set_smooth(&mut self, smooth: bool) {
        let request = SphereRequest {
            smooth,
            ..self.params.to_request()
        };
        self.configure_request(&request);
    }

    /// Changes the up axis (code 1, 2 or 3), keeping every other parameter.
    pub fn set_up_axis(&mut self, up_axis: i32) {
        let request = SphereRequest {
            up_axis,
            ..self.params.to_request()
        };
        self.configure_request(&request);
    }

    /// Returns the last applied (normalized) parameters.
    #[inline]
    pub fn params(&self) -> &SphereParams {
        &self.params
    }

    /// Sphere radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.params.radius()
    }

    /// Longitude divisions.
    #[inline]
    pub fn sector_count(&self) -> u32 {
        self.params.sector_count()
    }

    /// Latitude divisions.
    #[inline]
    pub fn stack_count(&self) -> u32 {
        self.params.stack_count()
    }

    /// Whether the mesh uses shared (smooth) vertices.
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.params.smooth()
    }

    /// Axis the poles point along.
    #[inline]
    pub fn up_axis(&self) -> UpAxis {
        self.params.up_axis()
    }

    /// Vertex positions, `3 * vertex_count` floats.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.buffers.positions
    }

    /// Vertex normals, `3 * vertex_count` floats.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.buffers.normals
    }

    /// Texture coordinates, `2 * vertex_count` floats.
    #[inline]
    pub fn tex_coords(&self) -> &[f32] {
        &self.buffers.tex_coords
    }

    /// Triangle indices, `3 * triangle_count` entries.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.buffers.indices
    }

    /// Wireframe segment endpoints, `2 * line_count` entries.
    #[inline]
    pub fn line_indices(&self) -> &[u32] {
        &self.buffers.line_indices
    }

    /// Interleaved position/normal/texcoord buffer, 8 floats per vertex.
    #[inline]
    pub fn interleaved(&self) -> &[f32] {
        &self.buffers.interleaved
    }

    /// Bytes between consecutive vertices in [`MeshBuilder::interleaved`].
    #[inline]
    pub fn interleaved_stride(&self) -> usize {
        INTERLEAVED_STRIDE_BYTES
    }

    /// All exported buffers.
    #[inline]
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Consumes the builder, keeping only the exported buffers.
    pub fn into_buffers(self) -> MeshBuffers {
        self.buffers
    }

    /// The f64 generation-phase mesh the buffers were exported from.
    #[inline]
    pub fn raw(&self) -> &RawMesh {
        &self.raw
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.raw.vertex_count()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.raw.triangle_count()
    }

    /// Number of triangle indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.buffers.indices.len()
    }

    /// Number of wireframe segments.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.raw.line_count()
    }
}

impl fmt::Display for MeshBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Sphere =====")?;
        writeln!(f, "        Radius: {}", self.radius())?;
        writeln!(f, "  Sector Count: {}", self.sector_count())?;
        writeln!(f, "   Stack Count: {}", self.stack_count())?;
        writeln!(f, "Smooth Shading: {}", self.is_smooth())?;
        writeln!(f, "       Up Axis: {}", self.up_axis())?;
        writeln!(f, "Triangle Count: {}", self.triangle_count())?;
        writeln!(f, "   Index Count: {}", self.index_count())?;
        writeln!(f, "    Line Count: {}", self.line_count())?;
        writeln!(f, "  Vertex Count: {}", self.vertex_count())?;
        writeln!(f, "  Normal Count: {}", self.buffers.normals.len() / 3)?;
        write!(f, "TexCoord Count: {}", self.buffers.tex_coords.len() / 2)
    }
}
