//! # Electron
//!
//! The renderable sphere used for electrons: a fixed low-resolution smooth
//! sphere whose size can be reset without touching its orientation.

use config::constants::ELECTRON_SUBDIVISIONS;
use sphere_mesh::MeshBuilder;
use wasm_bindgen::prelude::*;

/// Electron geometry with flat typed-array accessors.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const electron = new Electron(0.05, 2);
/// geometry.setAttribute('position', new THREE.BufferAttribute(electron.positions_flat(), 3));
/// electron.reset(0.1);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Electron {
    builder: MeshBuilder,
}

#[wasm_bindgen]
impl Electron {
    /// Creates an electron sphere of the given radius and up axis.
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, up_axis: i32) -> Electron {
        Self {
            builder: MeshBuilder::new(
                radius,
                ELECTRON_SUBDIVISIONS,
                ELECTRON_SUBDIVISIONS,
                true,
                up_axis,
            ),
        }
    }

    /// Rebuilds the geometry with a new radius, keeping the current up axis.
    pub fn reset(&mut self, radius: f64) {
        let up_axis = self.builder.up_axis().code();
        self.builder.configure(
            radius,
            ELECTRON_SUBDIVISIONS,
            ELECTRON_SUBDIVISIONS,
            true,
            up_axis,
        );
    }

    /// Returns the applied radius.
    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.builder.radius()
    }

    /// Returns the applied up-axis code.
    #[wasm_bindgen(getter)]
    pub fn up_axis(&self) -> i32 {
        self.builder.up_axis().code()
    }

    /// Vertex positions, three floats per vertex.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.builder.positions().to_vec()
    }

    /// Triangle indices, three per triangle.
    pub fn indices_flat(&self) -> Vec<u32> {
        self.builder.indices().to_vec()
    }

    /// Vertex normals, three floats per vertex.
    pub fn normals_flat(&self) -> Vec<f32> {
        self.builder.normals().to_vec()
    }

    /// Texture coordinates, two floats per vertex.
    pub fn uv_flat(&self) -> Vec<f32> {
        self.builder.tex_coords().to_vec()
    }
}
