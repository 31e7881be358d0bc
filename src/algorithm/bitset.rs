use crate::spatial::tiles::ShapeId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over the shapes of one catalog
///
/// Membership is keyed by [`ShapeId`], and iteration always runs in ascending
/// id order so that candidate lists come out the same for a given catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeBitset {
    bits: BitVec,
}

impl ShapeBitset {
    /// Create a bitset with no shapes present
    pub fn new(shape_count: usize) -> Self {
        Self {
            bits: bitvec![0; shape_count],
        }
    }

    /// Insert a shape, ignoring ids outside the catalog
    pub fn insert(&mut self, shape: ShapeId) {
        if shape.0 < self.bits.len() {
            self.bits.set(shape.0, true);
        }
    }

    /// Test shape membership
    pub fn contains(&self, shape: ShapeId) -> bool {
        self.bits.get(shape.0).as_deref() == Some(&true)
    }

    /// Test if no shapes are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count shapes in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Members in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.bits.iter_ones().map(ShapeId)
    }
}

impl fmt::Display for ShapeBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<usize> = self.bits.iter_ones().collect();
        write!(f, "ShapeBitset({} shapes: {members:?})", self.count())
    }
}
