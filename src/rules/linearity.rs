//! Bias toward continuing straight
//!
//! Entries are keyed by cell and direction and hold the probability that
//! growth from that cell along that direction keeps going straight. Growing
//! from a cell consumes its entry and seeds the next cell with
//! `curve(current - decay)`.

use crate::algorithm::selection::Candidate;
use crate::math::interpolation::ResponseCurve;
use crate::spatial::direction::Direction;
use std::collections::HashMap;

/// State of one linearity entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Continuation {
    /// Probability in `[0, 1]` of continuing straight
    Probability(f64),
    /// Entry has been used and no longer biases growth
    Consumed,
}

/// Sparse map from `(cell, direction)` to continuation state
#[derive(Clone, Debug, Default)]
pub struct LinearityMatrix {
    entries: HashMap<([i32; 2], Direction), Continuation>,
}

impl LinearityMatrix {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entry at `(position, axis)`
    pub fn get(&self, position: [i32; 2], axis: Direction) -> Option<Continuation> {
        self.entries.get(&(position, axis)).copied()
    }

    /// Probability of continuing along `axis` from `position`
    ///
    /// Unset entries fall back to `base`; consumed entries give `None`.
    pub fn probability(&self, position: [i32; 2], axis: Direction, base: f64) -> Option<f64> {
        match self.get(position, axis) {
            Some(Continuation::Probability(value)) => Some(value),
            Some(Continuation::Consumed) => None,
            None => Some(base),
        }
    }

    /// Update the matrix after growing from `parent` into `position` along `axis`
    pub fn record_placement(
        &mut self,
        parent: [i32; 2],
        position: [i32; 2],
        axis: Direction,
        base: f64,
        decay: f64,
        curve: &ResponseCurve,
    ) {
        let current = self.probability(parent, axis, base).unwrap_or(base);
        let next = curve.evaluate(current - decay).clamp(0.0, 1.0);
        self.entries
            .insert((position, axis), Continuation::Probability(next));
        self.entries.insert((parent, axis), Continuation::Consumed);
    }

    /// Keep only straight continuations when `sample` falls under the probability
    ///
    /// `generation_axis` is the axis the parent itself was grown on; the
    /// start tile has none and is never biased.
    pub fn filter(
        &self,
        candidates: Vec<Candidate>,
        parent: [i32; 2],
        generation_axis: Option<Direction>,
        base: f64,
        sample: impl FnOnce() -> f64,
    ) -> Vec<Candidate> {
        let Some(axis) = generation_axis else {
            return candidates;
        };
        let Some(probability) = self.probability(parent, axis, base) else {
            return candidates;
        };
        if probability <= 0.0 || sample() >= probability {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| candidate.axis == axis)
            .collect()
    }

    /// Number of entries, consumed ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been written
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
