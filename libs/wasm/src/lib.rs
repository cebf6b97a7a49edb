//! Sphere geometry for the browser.
//!
//! Orbital renderers build their electron and shell spheres here and copy the
//! resulting typed arrays straight into GPU buffers. [`SphereHandle`] exposes
//! every tessellation parameter, [`Electron`] is the fixed low-poly variant,
//! and [`create_sphere`] accepts a JSON parameter object. Errors come back as
//! `Result<_, MeshError>` from `create_sphere_internal`, which native tests use
//! in place of the `JsValue` variant.
//!
//! ```
//! let sphere = orbital_wasm::create_sphere_internal(r#"{ "sectors": 4, "stacks": 2 }"#).unwrap();
//! assert_eq!(sphere.vertex_count(), 15);
//! ```

use config::constants::{DEFAULT_SECTOR_COUNT, DEFAULT_STACK_COUNT};
use sphere_mesh::{MeshBuilder, MeshError, SphereRequest};
use wasm_bindgen::prelude::*;

mod electron;
mod sphere_handle;

pub use electron::Electron;
pub use sphere_handle::SphereHandle;

/// Routes panics raised while tessellating to `console.error`.
///
/// Does nothing when built without the `console_error_panic_hook` feature.
/// Calling it more than once is harmless.
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the sector count a sphere gets when the caller does not pick one.
///
/// # Examples
/// ```
/// assert_eq!(orbital_wasm::default_sector_count(), 36);
/// ```
#[wasm_bindgen]
pub fn default_sector_count() -> i32 {
    DEFAULT_SECTOR_COUNT
}

/// Returns the stack count a sphere gets when the caller does not pick one.
///
/// # Examples
/// ```
/// assert_eq!(orbital_wasm::default_stack_count(), 18);
/// ```
#[wasm_bindgen]
pub fn default_stack_count() -> i32 {
    DEFAULT_STACK_COUNT
}

/// Builds a sphere from a JSON parameter object.
///
/// Missing fields take the defaults; present fields go through the usual
/// clamp-and-default policy.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the JSON cannot be decoded.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const sphere = create_sphere('{"radius": 2, "smooth": false}');
/// // console.log(sphere.vertex_count, sphere.triangle_count);
/// ```
#[wasm_bindgen]
pub fn create_sphere(json: &str) -> Result<SphereHandle, JsValue> {
    create_sphere_internal(json).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`create_sphere`], exposing Rust error types
/// directly.
///
/// # Errors
/// Returns [`MeshError::InvalidRequest`] when the JSON cannot be decoded.
pub fn create_sphere_internal(json: &str) -> Result<SphereHandle, MeshError> {
    let request = SphereRequest::from_json(json).map_err(|err| {
        tracing::warn!(error = %err, "rejected sphere request");
        err
    })?;
    Ok(SphereHandle::from_builder(MeshBuilder::from_request(&request)))
}
