//! Layout rules that filter growth candidates
//!
//! Rules run in priority order and each one narrows the set produced by the
//! previous one. Their matrices are fed back after every accepted placement.

/// Straight-run bias
pub mod linearity;
/// Junction spacing
pub mod separation;

use crate::algorithm::selection::{Candidate, RandomSelector};
use crate::io::configuration::GenerationParams;
use crate::spatial::grid::PlacedTile;
use crate::spatial::tiles::TileCatalog;
use linearity::LinearityMatrix;
use separation::SeparationMatrix;

/// A layout rule applied during growth
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum GenerationRule {
    /// Keep junctions a minimum distance apart
    Separation,
    /// Prefer continuing along the parent's axis
    Linearity,
}

/// Borrowed view of everything the rules read
pub struct RuleContext<'a> {
    /// Shape descriptors
    pub catalog: &'a TileCatalog,
    /// Run parameters, including rule priority
    pub params: &'a GenerationParams,
    /// Junction spacing state
    pub separation: &'a SeparationMatrix,
    /// Straight-run state
    pub linearity: &'a LinearityMatrix,
}

impl RuleContext<'_> {
    /// Filter `candidates` grown from `parent` through every configured rule
    pub fn apply(
        &self,
        parent: &PlacedTile,
        candidates: Vec<Candidate>,
        selector: &mut RandomSelector,
    ) -> Vec<Candidate> {
        let mut filtered = candidates;
        for rule in &self.params.rule_priority {
            if filtered.is_empty() {
                break;
            }
            filtered = self.apply_rule(*rule, parent, filtered, selector);
        }
        filtered
    }

    fn apply_rule(
        &self,
        rule: GenerationRule,
        parent: &PlacedTile,
        candidates: Vec<Candidate>,
        selector: &mut RandomSelector,
    ) -> Vec<Candidate> {
        match rule {
            GenerationRule::Separation => self.separation.filter(
                candidates,
                parent.position,
                self.params.separation.threshold,
                |shape| self.catalog.is_branch(shape),
            ),
            GenerationRule::Linearity => self.linearity.filter(
                candidates,
                parent.position,
                parent.generation_axis,
                self.params.linearity.coefficient,
                || selector.sample(),
            ),
        }
    }
}
