//! Mathematical utilities for the generator

/// Cubic spline response curves for rule feedback
pub mod interpolation;
