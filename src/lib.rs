//! Procedural road grid generation from connector-matched tile shapes
//!
//! A start terminal is placed at the origin and roads grow outward, one tile per
//! open tile per pass, until a depth-derived budget is spent. Every connector left
//! open is then capped with a dead end so the final grid is closed. Layout rules
//! for junction spacing and straight runs filter each growth step.

#![forbid(unsafe_code)]

/// Generation engine including candidate selection and the run driver
pub mod algorithm;
/// Catalog files, configuration, placement output and error handling
pub mod io;
/// Response curves used by rule feedback
pub mod math;
/// Layout rules that filter growth candidates
pub mod rules;
/// Directions, tile shapes and the sparse grid
pub mod spatial;

pub use io::error::{GenerationError, Result};
