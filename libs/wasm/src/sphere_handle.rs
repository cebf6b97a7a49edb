//! # Sphere Handle
//!
//! WASM-friendly wrapper around [`MeshBuilder`] that can be driven from
//! JavaScript.

use sphere_mesh::MeshBuilder;
use wasm_bindgen::prelude::*;

/// A configurable sphere whose buffers can be copied into JavaScript.
///
/// Every buffer accessor returns a fresh typed-array copy, so the values stay
/// valid after the handle is reconfigured.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const sphere = new SphereHandle(1.0, 36, 18, true, 2);
///
/// // Get counts
/// const vertexCount = sphere.vertex_count;
/// const triangleCount = sphere.triangle_count;
///
/// // Create BufferGeometry from the interleaved layout
/// const buffer = new THREE.InterleavedBuffer(sphere.interleaved(), 8);
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.InterleavedBufferAttribute(buffer, 3, 0));
/// geometry.setAttribute('normal', new THREE.InterleavedBufferAttribute(buffer, 3, 3));
/// geometry.setAttribute('uv', new THREE.InterleavedBufferAttribute(buffer, 2, 6));
/// geometry.setIndex(new THREE.BufferAttribute(sphere.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SphereHandle {
    builder: MeshBuilder,
}

#[wasm_bindgen]
impl SphereHandle {
    /// Creates and configures a sphere. Out-of-range inputs are clamped.
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, sectors: i32, stacks: i32, smooth: bool, up_axis: i32) -> SphereHandle {
        Self::from_builder(MeshBuilder::new(radius, sectors, stacks, smooth, up_axis))
    }

    /// Creates a smooth, Y-up sphere, rejecting values the constructor would
    /// clamp.
    ///
    /// # Errors
    /// Returns a JavaScript error naming the rejected value.
    pub fn try_new(radius: f64, sectors: i32, stacks: i32) -> Result<SphereHandle, JsValue> {
        MeshBuilder::try_new(radius, sectors, stacks)
            .map(Self::from_builder)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Rebuilds every buffer from new parameters.
    pub fn configure(&mut self, radius: f64, sectors: i32, stacks: i32, smooth: bool, up_axis: i32) {
        self.builder.configure(radius, sectors, stacks, smooth, up_axis);
    }

    /// Changes the radius, keeping every other parameter.
    pub fn set_radius(&mut self, radius: f64) {
        self.builder.set_radius(radius);
    }

    /// Changes the sector count, keeping every other parameter.
    pub fn set_sector_count(&mut self, sectors: i32) {
        self.builder.set_sector_count(sectors);
    }

    /// Changes the stack count, keeping every other parameter.
    pub fn set_stack_count(&mut self, stacks: i32) {
        self.builder.set_stack_count(stacks);
    }

    /// Switches between smooth and flat shading.
    pub fn set_smooth(&mut self, smooth: bool) {
        self.builder.set_smooth(smooth);
    }

    /// Changes the up axis (1 = X, 2 = Y, 3 = Z).
    pub fn set_up_axis(&mut self, up_axis: i32) {
        self.builder.set_up_axis(up_axis);
    }

    /// Returns the applied radius.
    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.builder.radius()
    }

    /// Returns the applied sector count.
    #[wasm_bindgen(getter)]
    pub fn sector_count(&self) -> u32 {
        self.builder.sector_count()
    }

    /// Returns the applied stack count.
    #[wasm_bindgen(getter)]
    pub fn stack_count(&self) -> u32 {
        self.builder.stack_count()
    }

    /// Returns true for smooth shading.
    #[wasm_bindgen(getter)]
    pub fn smooth(&self) -> bool {
        self.builder.is_smooth()
    }

    /// Returns the applied up-axis code.
    #[wasm_bindgen(getter)]
    pub fn up_axis(&self) -> i32 {
        self.builder.up_axis().code()
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        to_u32(self.builder.vertex_count())
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        to_u32(self.builder.triangle_count())
    }

    /// Returns the number of triangle indices.
    #[wasm_bindgen(getter)]
    pub fn index_count(&self) -> u32 {
        to_u32(self.builder.index_count())
    }

    /// Returns the number of wireframe segments.
    #[wasm_bindgen(getter)]
    pub fn line_count(&self) -> u32 {
        to_u32(self.builder.line_count())
    }

    /// Returns the interleaved stride in bytes.
    #[wasm_bindgen(getter)]
    pub fn interleaved_stride(&self) -> u32 {
        to_u32(self.builder.interleaved_stride())
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    pub fn positions(&self) -> Vec<f32> {
        self.builder.positions().to_vec()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Format: [nx, ny, nz, ...]
    pub fn normals(&self) -> Vec<f32> {
        self.builder.normals().to_vec()
    }

    /// Returns the texture coordinates as a Float32Array.
    ///
    /// Format: [s, t, s, t, ...]
    pub fn tex_coords(&self) -> Vec<f32> {
        self.builder.tex_coords().to_vec()
    }

    /// Returns the triangle indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.builder.indices().to_vec()
    }

    /// Returns the wireframe segment endpoints as a Uint32Array.
    pub fn line_indices(&self) -> Vec<u32> {
        self.builder.line_indices().to_vec()
    }

    /// Returns the interleaved buffer as a Float32Array.
    ///
    /// Format: [x, y, z, nx, ny, nz, s, t, ...]
    pub fn interleaved(&self) -> Vec<f32> {
        self.builder.interleaved().to_vec()
    }

    /// Returns the applied parameters as a JSON string.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    pub fn params_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.builder.params())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Returns a human-readable summary of parameters and counts.
    pub fn describe(&self) -> String {
        self.builder.to_string()
    }

    /// Converts the parameters and counts to a plain JavaScript object.
    ///
    /// This is useful for passing data between the worker and main thread,
    /// as wasm-bindgen wrappers cannot be transferred.
    ///
    /// # Errors
    /// Returns the JavaScript exception raised while setting a property.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &"radius".into(), &JsValue::from_f64(self.radius()))?;
        Reflect::set(&obj, &"sectorCount".into(), &JsValue::from(self.sector_count()))?;
        Reflect::set(&obj, &"stackCount".into(), &JsValue::from(self.stack_count()))?;
        Reflect::set(&obj, &"smooth".into(), &JsValue::from_bool(self.smooth()))?;
        Reflect::set(&obj, &"upAxis".into(), &JsValue::from(self.up_axis()))?;
        Reflect::set(&obj, &"vertexCount".into(), &JsValue::from(self.vertex_count()))?;
        Reflect::set(&obj, &"triangleCount".into(), &JsValue::from(self.triangle_count()))?;
        Reflect::set(&obj, &"lineCount".into(), &JsValue::from(self.line_count()))?;

        Ok(JsValue::from(obj))
    }
}

impl SphereHandle {
    /// Wraps an already configured builder.
    pub fn from_builder(builder: MeshBuilder) -> Self {
        Self { builder }
    }

    /// Returns the wrapped builder.
    pub fn builder(&self) -> &MeshBuilder {
        &self.builder
    }
}

fn to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
