//! Discard-and-retry driver around a generation session

use crate::algorithm::executor::GenerationSession;
use crate::io::error::{GenerationError, Result};
use crate::io::placement::TilePlacer;
use tracing::{debug, info};

/// Summary of an accepted run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Attempts made, including the accepted one
    pub attempts: usize,
    /// Total tiles placed
    pub size: usize,
    /// Road (non-terminal) tiles placed
    pub structural: usize,
    /// Terminal tiles placed
    pub terminals: usize,
    /// Growth passes in the accepted attempt
    pub growth_passes: usize,
    /// Closing passes in the accepted attempt
    pub termination_passes: usize,
    /// Skipped tiles in the accepted attempt
    pub dead_ends: usize,
    /// Connectors left facing empty cells
    pub unclosed_axes: usize,
}

impl<P: TilePlacer> GenerationSession<P> {
    /// Generate grids until one lands in the accepted size range
    ///
    /// Each attempt starts from a [`reset`](Self::reset) session. Without size
    /// bounds the first attempt is always accepted. An attempt whose closing
    /// pass diverges is discarded like an out-of-range one.
    ///
    /// # Errors
    ///
    /// Returns an error once every attempt is used up:
    /// - [`GenerationError::TerminationDiverged`] if the last attempt diverged
    /// - [`GenerationError::OutOfRange`] if it fell outside the accepted range
    pub fn run(&mut self) -> Result<GenerationReport> {
        let max_attempts = self.params.max_attempts;
        let mut diverged = None;

        for attempt in 1..=max_attempts {
            self.reset();
            if let Err(error) = self.generate() {
                if !matches!(error, GenerationError::TerminationDiverged { .. }) {
                    return Err(error);
                }
                debug!(attempt, size = self.size(), %error, "closing diverged; retrying");
                diverged = Some(error);
                continue;
            }
            diverged = None;

            let size = self.size();
            if self.params.accepts(size) {
                let report = self.report(attempt);
                info!(
                    attempt,
                    size,
                    structural = report.structural,
                    dead_ends = report.dead_ends,
                    "grid accepted"
                );
                return Ok(report);
            }

            debug!(attempt, size, "grid outside accepted range; retrying");
        }

        if let Some(error) = diverged {
            return Err(error);
        }

        let (min, max) = self.params.accepted_range().unwrap_or((0.0, f64::INFINITY));
        Err(GenerationError::OutOfRange {
            attempts: max_attempts,
            size: self.size(),
            min,
            max,
        })
    }

    fn report(&self, attempts: usize) -> GenerationReport {
        let stats = self.stats();
        let structural = self.structural_size();

        GenerationReport {
            attempts,
            size: self.size(),
            structural,
            terminals: self.size() - structural,
            growth_passes: stats.growth_passes,
            termination_passes: stats.termination_passes,
            dead_ends: stats.dead_ends,
            unclosed_axes: stats.unclosed_axes,
        }
    }
}
