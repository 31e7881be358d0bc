//! Compatibility graph between tile shapes
//!
//! For a shape S and one of its connectors `a`, the index holds every shape
//! that exposes `opposite(a)` and could therefore sit on the far side of `a`.

use crate::algorithm::bitset::ShapeBitset;
use crate::spatial::direction::Direction;
use crate::spatial::tiles::{ShapeId, TileCatalog};
use std::collections::HashMap;

/// Per-shape, per-connector lists of compatible neighbours
#[derive(Clone, Debug)]
pub struct ConnectivityIndex {
    connections: HashMap<(ShapeId, Direction), ShapeBitset>,
}

impl ConnectivityIndex {
    /// Build the index over the shapes in `scope`
    ///
    /// Only shapes in `scope` appear as keys or as members. A connector with
    /// no compatible shape still gets an (empty) entry, so [`Self::seeks`]
    /// reports every declared connector.
    pub fn build(catalog: &TileCatalog, scope: &[ShapeId]) -> Self {
        let mut connections = HashMap::new();

        for &shape in scope {
            for axis in catalog.axes_of(shape).iter() {
                let wanted = axis.opposite();
                let mut compatible = ShapeBitset::new(catalog.len());
                for &other in scope {
                    if catalog.axes_of(other).contains(wanted) {
                        compatible.insert(other);
                    }
                }
                connections.insert((shape, axis), compatible);
            }
        }

        Self { connections }
    }

    /// Shapes that can be placed next to `shape` across `axis`
    pub fn connections(&self, shape: ShapeId, axis: Direction) -> impl Iterator<Item = ShapeId> + '_ {
        self.connections
            .get(&(shape, axis))
            .into_iter()
            .flat_map(|compatible| compatible.iter())
    }

    /// Compatibility set for `shape` across `axis`, if the connector exists
    pub fn compatible(&self, shape: ShapeId, axis: Direction) -> Option<&ShapeBitset> {
        self.connections.get(&(shape, axis))
    }

    /// Whether `shape` declares a connection along `axis`
    pub fn seeks(&self, shape: ShapeId, axis: Direction) -> bool {
        self.connections.contains_key(&(shape, axis))
    }
}
