//! # Config Crate
//!
//! Centralized configuration constants for the sphere tessellation workspace.
//! Tessellation defaults, clamping minimums and numeric tolerances live here
//! so the mesh engine and the browser bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SECTOR_COUNT, MIN_SECTOR_COUNT};
//!
//! let requested = 1;
//! let sectors = if requested < MIN_SECTOR_COUNT { MIN_SECTOR_COUNT } else { requested };
//! assert_eq!(sectors, 3);
//! assert!(DEFAULT_SECTOR_COUNT > sectors);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
