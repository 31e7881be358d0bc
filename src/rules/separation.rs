//! Minimum spacing between junctions
//!
//! Each cell may carry the number of steps since the nearest branch point.
//! A junction writes a zero marker at its own cell and a count of `1..=radius`
//! along the two directions perpendicular to the axis it was grown on. Plain
//! road tiles extend the count of the tile they grew from by one.

use crate::algorithm::selection::Candidate;
use crate::spatial::direction::Direction;
use crate::spatial::tiles::ShapeId;
use std::collections::HashMap;

/// Sparse map from cell to distance since the last branch point
#[derive(Clone, Debug, Default)]
pub struct SeparationMatrix {
    distances: HashMap<[i32; 2], u32>,
}

impl SeparationMatrix {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded distance at `position`; `None` means no branch is near
    pub fn get(&self, position: [i32; 2]) -> Option<u32> {
        self.distances.get(&position).copied()
    }

    /// Distance a tile placed at `target` from `parent` would carry
    ///
    /// The smaller of the value already recorded at the target and the
    /// parent's value plus one. Unset on both sides means unconstrained.
    pub fn separation_for(&self, target: [i32; 2], parent: [i32; 2]) -> Option<u32> {
        let inherited = self.get(parent).map(|distance| distance.saturating_add(1));
        match (self.get(target), inherited) {
            (Some(recorded), Some(inherited)) => Some(recorded.min(inherited)),
            (recorded, inherited) => recorded.or(inherited),
        }
    }

    /// Update the matrix after a tile has been placed
    pub fn record_placement(
        &mut self,
        position: [i32; 2],
        parent: [i32; 2],
        axis: Direction,
        branch: bool,
        radius: u32,
    ) {
        if branch {
            self.lower(position, 0);
            for direction in axis.orthogonal() {
                for distance in 1..=radius {
                    let cell = direction.step(position, distance as i32);
                    self.lower(cell, distance);
                }
            }
        } else if let Some(inherited) = self.separation_for(position, parent) {
            self.lower(position, inherited);
        }
    }

    /// Drop junction candidates that would sit closer than `threshold` to a branch
    ///
    /// Non-junction candidates always pass; a threshold of zero disables the rule.
    pub fn filter(
        &self,
        candidates: Vec<Candidate>,
        parent: [i32; 2],
        threshold: u32,
        is_branch: impl Fn(ShapeId) -> bool,
    ) -> Vec<Candidate> {
        if threshold == 0 {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|candidate| {
                !is_branch(candidate.shape)
                    || self
                        .separation_for(candidate.position, parent)
                        .is_none_or(|distance| distance >= threshold)
            })
            .collect()
    }

    /// Number of cells carrying a distance
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether no distance has been recorded
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Forget every recorded distance
    pub fn reset(&mut self) {
        self.distances.clear();
    }

    fn lower(&mut self, position: [i32; 2], distance: u32) {
        self.distances
            .entry(position)
            .and_modify(|current| *current = (*current).min(distance))
            .or_insert(distance);
    }
}
