//! Generation parameters and their defaults

use crate::io::error::{Result, invalid_parameter};
use crate::math::interpolation::ResponseCurve;
use crate::rules::GenerationRule;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of growth passes
pub const DEFAULT_DEPTH: usize = 12;

/// Default multiplier turning depth into a tile budget
pub const DEFAULT_MAGNITUDE: f64 = 4.0;

/// Default number of discard-and-restart attempts
pub const DEFAULT_MAX_ATTEMPTS: usize = 32;

// Guards the closing pass against catalogs that never converge
/// Maximum passes of the closing loop
pub const DEFAULT_MAX_TERMINATION_PASSES: usize = 1_000;

/// Default distance over which a junction suppresses other junctions
pub const DEFAULT_SEPARATION_RADIUS: u32 = 2;

/// Largest accepted separation radius
pub const MAX_SEPARATION_RADIUS: u32 = 1_024;

// Target-driven growth only; a pass can place nothing while the rules hold every tile back
/// Consecutive empty growth passes tolerated before growth gives up on the target
pub const MAX_IDLE_GROWTH_PASSES: usize = 64;

/// Default drop in continuation probability per straight step
pub const DEFAULT_LINEARITY_DECAY: f64 = 0.05;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// How long growth runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GrowthMode {
    /// `depth` passes, each stopping early once the tile budget is reached
    #[default]
    Passes,
    /// As many passes as it takes to reach the tile budget
    Target,
}

/// Accepted final tile count, as multiples of depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeBounds {
    /// Lower multiple (inclusive)
    pub min: f64,
    /// Upper multiple (inclusive)
    pub max: f64,
}

/// Junction spacing knobs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeparationParams {
    /// Minimum steps between junctions; zero disables the rule
    pub threshold: u32,
    /// How far a junction marks its perpendicular neighbourhood
    pub radius: u32,
}

impl Default for SeparationParams {
    fn default() -> Self {
        Self {
            threshold: 0,
            radius: DEFAULT_SEPARATION_RADIUS,
        }
    }
}

/// Straight-run bias knobs
#[derive(Clone, Debug, PartialEq)]
pub struct LinearityParams {
    /// Starting continuation probability; zero disables the rule
    pub coefficient: f64,
    /// Subtracted from the probability before each curve evaluation
    pub decay: f64,
    /// Response curve mapping the decayed probability to the next one
    pub curve: ResponseCurve,
}

impl Default for LinearityParams {
    fn default() -> Self {
        Self {
            coefficient: 0.0,
            decay: DEFAULT_LINEARITY_DECAY,
            curve: ResponseCurve::identity(),
        }
    }
}

/// Everything a run needs beyond the catalog
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    /// Number of growth passes
    pub depth: usize,
    /// Tile budget multiplier: growth stops at `depth * magnitude` road tiles
    pub magnitude: f64,
    /// Pass-count or target-driven growth
    pub growth_mode: GrowthMode,
    /// Accepted final size; `None` accepts any grid
    pub size_bounds: Option<SizeBounds>,
    /// Attempts before an out-of-range result is reported
    pub max_attempts: usize,
    /// Cap on closing passes
    pub max_termination_passes: usize,
    /// Junction spacing
    pub separation: SeparationParams,
    /// Straight-run bias
    pub linearity: LinearityParams,
    /// Rules in priority order, highest first
    pub rule_priority: Vec<GenerationRule>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            magnitude: DEFAULT_MAGNITUDE,
            growth_mode: GrowthMode::default(),
            size_bounds: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_termination_passes: DEFAULT_MAX_TERMINATION_PASSES,
            separation: SeparationParams::default(),
            linearity: LinearityParams::default(),
            rule_priority: vec![GenerationRule::Separation, GenerationRule::Linearity],
        }
    }
}

impl GenerationParams {
    /// Number of road tiles growth aims for
    pub fn target_tiles(&self) -> f64 {
        self.depth as f64 * self.magnitude
    }

    /// Accepted `[min, max]` tile counts, if bounded
    pub fn accepted_range(&self) -> Option<(f64, f64)> {
        self.size_bounds.map(|bounds| {
            let depth = self.depth as f64;
            (bounds.min * depth, bounds.max * depth)
        })
    }

    /// Whether a finished grid of `size` tiles is kept
    pub fn accepts(&self, size: usize) -> bool {
        self.accepted_range()
            .is_none_or(|(min, max)| (min..=max).contains(&(size as f64)))
    }

    /// Check parameter ranges before a run
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if:
    /// - `magnitude` is negative or not finite
    /// - Size bounds are negative, not finite or inverted
    /// - `max_attempts` or `max_termination_passes` is zero
    /// - The separation radius exceeds [`MAX_SEPARATION_RADIUS`]
    /// - The linearity coefficient is outside `[0, 1]` or the decay is negative
    /// - A rule appears twice in the priority list
    pub fn validate(&self) -> Result<()> {
        if !self.magnitude.is_finite() || self.magnitude < 0.0 {
            return Err(invalid_parameter(
                "magnitude",
                &self.magnitude,
                &"must be a finite, non-negative number",
            ));
        }

        if let Some(bounds) = self.size_bounds {
            if !bounds.min.is_finite() || !bounds.max.is_finite() || bounds.min < 0.0 {
                return Err(invalid_parameter(
                    "size_bounds",
                    &format!("{}..={}", bounds.min, bounds.max),
                    &"bounds must be finite and non-negative",
                ));
            }
            if bounds.min > bounds.max {
                return Err(invalid_parameter(
                    "size_bounds",
                    &format!("{}..={}", bounds.min, bounds.max),
                    &"minimum exceeds maximum",
                ));
            }
        }

        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt is required",
            ));
        }

        if self.max_termination_passes == 0 {
            return Err(invalid_parameter(
                "max_termination_passes",
                &self.max_termination_passes,
                &"at least one closing pass is required",
            ));
        }

        if self.separation.radius > MAX_SEPARATION_RADIUS {
            return Err(invalid_parameter(
                "separation.radius",
                &self.separation.radius,
                &format!("must be at most {MAX_SEPARATION_RADIUS}"),
            ));
        }

        let linearity = &self.linearity;
        if !(0.0..=1.0).contains(&linearity.coefficient) {
            return Err(invalid_parameter(
                "linearity.coefficient",
                &linearity.coefficient,
                &"must lie in [0, 1]",
            ));
        }
        if !linearity.decay.is_finite() || linearity.decay < 0.0 {
            return Err(invalid_parameter(
                "linearity.decay",
                &linearity.decay,
                &"must be a finite, non-negative number",
            ));
        }

        for (position, rule) in self.rule_priority.iter().enumerate() {
            if self.rule_priority.iter().skip(position + 1).any(|other| other == rule) {
                return Err(invalid_parameter(
                    "rule_priority",
                    &format!("{:?}", self.rule_priority),
                    &format!("{rule:?} is listed more than once"),
                ));
            }
        }

        Ok(())
    }
}
