//! Cubic spline response curves
//!
//! Implements natural spline boundary conditions where second derivatives
//! are zero at the endpoints. Two control points give a straight line.

use std::error::Error;
use std::fmt;

/// Error type for curve construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveError {
    message: String,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Curve error: {}", self.message)
    }
}

impl Error for CurveError {}

impl CurveError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Smooth response curve through a set of control points
///
/// Points outside the control range evaluate to the nearest end value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    points: Vec<[f64; 2]>,
    second_derivatives: Vec<f64>,
}

impl ResponseCurve {
    /// The identity on `[0, 1]`
    pub fn identity() -> Self {
        Self {
            points: vec![[0.0, 0.0], [1.0, 1.0]],
            second_derivatives: vec![0.0, 0.0],
        }
    }

    /// Fit a natural cubic spline through `[x, y]` control points
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than 2 points are provided
    /// - A coordinate is not finite
    /// - The x values are not strictly increasing
    pub fn new(points: Vec<[f64; 2]>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::new("Need at least 2 points for a curve"));
        }
        if points.iter().flatten().any(|value| !value.is_finite()) {
            return Err(CurveError::new("Control points must be finite"));
        }
        if points.windows(2).any(|pair| match pair {
            [[x0, _], [x1, _]] => x1 <= x0,
            _ => false,
        }) {
            return Err(CurveError::new("x values must be strictly increasing"));
        }

        let second_derivatives = natural_second_derivatives(&points);
        Ok(Self {
            points,
            second_derivatives,
        })
    }

    /// Control points the curve was fitted to
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Evaluate the curve at `x`
    ///
    /// Uses binary search to find the spline segment, then evaluates the
    /// cubic polynomial for that segment.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (Some(&[first_x, first_y]), Some(&[last_x, last_y])) =
            (self.points.first(), self.points.last())
        else {
            return x;
        };
        if x <= first_x {
            return first_y;
        }
        if x >= last_x {
            return last_y;
        }

        let hi = self.points.partition_point(|point| point[0] <= x);
        let lo = hi.saturating_sub(1);
        let (Some(&[x_lo, y_lo]), Some(&[x_hi, y_hi])) = (self.points.get(lo), self.points.get(hi))
        else {
            return last_y;
        };
        let d_lo = self.second_derivatives.get(lo).copied().unwrap_or(0.0);
        let d_hi = self.second_derivatives.get(hi).copied().unwrap_or(0.0);

        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;

        a * y_lo + b * y_hi + ((a.powi(3) - a) * d_lo + (b.powi(3) - b) * d_hi) * h.powi(2) / 6.0
    }
}

impl Default for ResponseCurve {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tridiagonal solve for the spline's second derivatives
fn natural_second_derivatives(points: &[[f64; 2]]) -> Vec<f64> {
    let n = points.len();
    let mut derivatives = Vec::with_capacity(n);
    let mut decomposed = Vec::with_capacity(n);
    derivatives.push(0.0);
    decomposed.push(0.0);

    for window in points.windows(3) {
        let &[[x0, y0], [x1, y1], [x2, y2]] = window else {
            continue;
        };
        let sig = (x1 - x0) / (x2 - x0);
        let previous = derivatives.last().copied().unwrap_or(0.0);
        let p = sig.mul_add(previous, 2.0);
        derivatives.push((sig - 1.0) / p);

        let slope_change = (y2 - y1) / (x2 - x1) - (y1 - y0) / (x1 - x0);
        let carried = decomposed.last().copied().unwrap_or(0.0);
        decomposed.push(sig.mul_add(-carried, 6.0 * slope_change / (x2 - x0)) / p);
    }
    derivatives.push(0.0);

    let mut next = 0.0;
    for k in (0..n.saturating_sub(1)).rev() {
        let (Some(value), Some(&carried)) = (derivatives.get_mut(k), decomposed.get(k)) else {
            continue;
        };
        *value = value.mul_add(next, carried);
        next = *value;
    }

    derivatives
}
