//! # Sphere Mesh
//!
//! Browser-safe parametric sphere tessellation. Turns
//! (radius, sectors, stacks, shading mode, up axis) into GPU-ready buffers:
//! positions, normals, texture coordinates, triangle indices, wireframe line
//! indices and a 32-byte interleaved vertex layout.
//!
//! ## Architecture
//!
//! ```text
//! SphereRequest → SphereParams (clamped) → RawMesh (f64) → MeshBuffers (f32/u32)
//! ```
//!
//! ## Shading Modes
//!
//! - **Smooth**: one vertex per grid sample, shared by neighbouring triangles,
//!   with a per-vertex radial normal
//! - **Flat**: every triangle (or quad) owns its vertices so each face carries
//!   a single face normal
//!
//! ## Usage
//!
//! ```rust
//! use sphere_mesh::MeshBuilder;
//!
//! let sphere = MeshBuilder::new(1.0, 36, 18, true, 2);
//! assert_eq!(sphere.positions().len(), 3 * sphere.vertex_count());
//! assert_eq!(sphere.indices().len() % 3, 0);
//! ```

pub mod axis;
pub mod buffers;
pub mod builder;
pub mod error;
pub mod mesh;
pub mod normal;
pub mod params;
mod post;
pub mod tessellate;

pub use axis::UpAxis;
pub use buffers::MeshBuffers;
pub use builder::MeshBuilder;
pub use error::MeshError;
pub use mesh::RawMesh;
pub use params::{SphereParams, SphereRequest};
