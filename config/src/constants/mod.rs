//! Centralized configuration values shared across the sphere tessellation
//! workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// TESSELLATION DEFAULTS
// =============================================================================

/// Radius used when a builder is created without one, and the fallback
/// "previous" radius when the very first request carries a non-positive value.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIUS;
/// assert!(DEFAULT_RADIUS > 0.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default number of longitude divisions.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SECTOR_COUNT;
/// assert_eq!(DEFAULT_SECTOR_COUNT, 36);
/// ```
pub const DEFAULT_SECTOR_COUNT: i32 = 36;

/// Default number of latitude divisions.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_STACK_COUNT;
/// assert_eq!(DEFAULT_STACK_COUNT, 18);
/// ```
pub const DEFAULT_STACK_COUNT: i32 = 18;

/// Smooth shading is the default.
pub const DEFAULT_SMOOTH: bool = true;

/// Default up-axis code (`1` = X, `2` = Y, `3` = Z).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_UP_AXIS;
/// assert_eq!(DEFAULT_UP_AXIS, 2);
/// ```
pub const DEFAULT_UP_AXIS: i32 = 2;

// =============================================================================
// CLAMPING MINIMUMS
// =============================================================================

/// Fewest longitude divisions that still close a ring.
///
/// # Examples
/// ```
/// use config::constants::MIN_SECTOR_COUNT;
/// assert_eq!(1.max(MIN_SECTOR_COUNT), 3);
/// ```
pub const MIN_SECTOR_COUNT: i32 = 3;

/// Fewest latitude divisions: one northern and one southern cap.
///
/// # Examples
/// ```
/// use config::constants::MIN_STACK_COUNT;
/// assert_eq!(0.max(MIN_STACK_COUNT), 2);
/// ```
pub const MIN_STACK_COUNT: i32 = 2;

// =============================================================================
// PRECISION
// =============================================================================

/// Face normals whose unnormalized length is at or below this value are
/// treated as degenerate and reported as the zero vector.
///
/// # Examples
/// ```
/// use config::constants::FACE_NORMAL_EPSILON;
/// assert!(FACE_NORMAL_EPSILON < 1.0e-3);
/// ```
pub const FACE_NORMAL_EPSILON: f64 = 1.0e-6;

// =============================================================================
// BUFFER LAYOUT
// =============================================================================

/// Floats per vertex in the interleaved buffer: position, normal, texcoord.
///
/// # Examples
/// ```
/// use config::constants::INTERLEAVED_COMPONENTS;
/// assert_eq!(INTERLEAVED_COMPONENTS, 3 + 3 + 2);
/// ```
pub const INTERLEAVED_COMPONENTS: usize = 8;

/// Bytes to hop from one interleaved vertex to the next.
///
/// # Examples
/// ```
/// use config::constants::{INTERLEAVED_COMPONENTS, INTERLEAVED_STRIDE_BYTES};
/// assert_eq!(INTERLEAVED_STRIDE_BYTES, INTERLEAVED_COMPONENTS * 4);
/// ```
pub const INTERLEAVED_STRIDE_BYTES: usize = INTERLEAVED_COMPONENTS * std::mem::size_of::<f32>();

// =============================================================================
// ELECTRON GEOMETRY
// =============================================================================

/// Sector and stack count used for electron spheres.
///
/// # Examples
/// ```
/// use config::constants::{ELECTRON_SUBDIVISIONS, MIN_SECTOR_COUNT};
/// assert!(ELECTRON_SUBDIVISIONS >= MIN_SECTOR_COUNT);
/// ```
pub const ELECTRON_SUBDIVISIONS: i32 = 8;

/// Immutable snapshot of the tessellation defaults that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::SphereDefaults;
/// let defaults = SphereDefaults::default();
/// assert!(defaults.radius > 0.0);
/// assert_eq!(defaults.sector_count, 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereDefaults {
    /// Radius applied when none has been accepted yet.
    pub radius: f64,
    /// Longitude divisions.
    pub sector_count: i32,
    /// Latitude divisions.
    pub stack_count: i32,
    /// Shading mode.
    pub smooth: bool,
    /// Up-axis code.
    pub up_axis: i32,
}

impl SphereDefaults {
    /// Builds a set of defaults, rejecting values the tessellator would
    /// otherwise have to correct.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SphereDefaults;
    /// let defaults = SphereDefaults::new(2.0, 24, 12).expect("valid defaults");
    /// assert_eq!(defaults.stack_count, 12);
    /// ```
    pub fn new(radius: f64, sector_count: i32, stack_count: i32) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if sector_count < MIN_SECTOR_COUNT {
            return Err(ConfigError::InvalidSectors(sector_count));
        }
        if stack_count < MIN_STACK_COUNT {
            return Err(ConfigError::InvalidStacks(stack_count));
        }
        Ok(Self {
            radius,
            sector_count,
            stack_count,
            smooth: DEFAULT_SMOOTH,
            up_axis: DEFAULT_UP_AXIS,
        })
    }
}

impl Default for SphereDefaults {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            sector_count: DEFAULT_SECTOR_COUNT,
            stack_count: DEFAULT_STACK_COUNT,
            smooth: DEFAULT_SMOOTH,
            up_axis: DEFAULT_UP_AXIS,
        }
    }
}

/// Error returned when invalid default values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the radius is zero, negative or not finite.
    InvalidRadius(f64),
    /// Raised when the sector count cannot close a ring.
    InvalidSectors(i32),
    /// Raised when the stack count cannot form two caps.
    InvalidStacks(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => {
                write!(f, "radius must be positive and finite: {value}")
            }
            ConfigError::InvalidSectors(value) => {
                write!(f, "sector_count must be >= {MIN_SECTOR_COUNT}: {value}")
            }
            ConfigError::InvalidStacks(value) => {
                write!(f, "stack_count must be >= {MIN_STACK_COUNT}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
