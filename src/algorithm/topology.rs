//! Read-only, catalog-derived state shared by every run of a session

use crate::algorithm::connectivity::ConnectivityIndex;
use crate::io::error::{GenerationError, Result};
use crate::spatial::direction::{AxisMode, AxisSet, Direction};
use crate::spatial::tiles::{ShapeId, TileCatalog};
use std::collections::HashMap;
use tracing::warn;

/// Catalog, valid connectors and the compatibility graph for one axis mode
#[derive(Clone, Debug)]
pub struct Topology {
    catalog: TileCatalog,
    mode: AxisMode,
    valid_axes: AxisSet,
    scope: Vec<ShapeId>,
    index: ConnectivityIndex,
    terminal_for_axis: HashMap<Direction, ShapeId>,
    terminal_count: usize,
}

impl Topology {
    /// Restrict the catalog to `mode` and build the connectivity index
    ///
    /// Shapes in scope are the non-corner shapes whose connectors all belong
    /// to the mode. The terminal that closes connector `a` is the terminal
    /// exposing `opposite(a)`; the first one in catalog order wins.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidCatalog`] if the scope contains no
    /// terminal shape or no non-terminal shape
    pub fn new(catalog: TileCatalog, mode: AxisMode) -> Result<Self> {
        let valid_axes = mode.valid_axes();
        let scope: Vec<ShapeId> = catalog
            .iter()
            .filter(|(_, shape)| !shape.corner && shape.axes.is_subset(valid_axes))
            .map(|(id, _)| id)
            .collect();

        let mut terminal_for_axis = HashMap::new();
        let mut terminal_count = 0;
        for &id in &scope {
            if !catalog.is_terminal(id) {
                continue;
            }
            terminal_count += 1;
            if let Some(exposed) = catalog.axes_of(id).single() {
                terminal_for_axis.entry(exposed.opposite()).or_insert(id);
            }
        }

        if terminal_count == 0 {
            return Err(GenerationError::InvalidCatalog {
                reason: format!("no terminal shape is usable in {mode:?} mode"),
            });
        }
        if terminal_count == scope.len() {
            return Err(GenerationError::InvalidCatalog {
                reason: format!("no non-terminal shape is usable in {mode:?} mode"),
            });
        }

        for axis in valid_axes.iter() {
            if !terminal_for_axis.contains_key(&axis) {
                warn!(%axis, "no terminal closes this axis; open connectors along it cannot be capped");
            }
        }

        let index = ConnectivityIndex::build(&catalog, &scope);

        Ok(Self {
            catalog,
            mode,
            valid_axes,
            scope,
            index,
            terminal_for_axis,
            terminal_count,
        })
    }

    /// The full catalog, including out-of-scope shapes
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Axis mode the topology was built for
    pub const fn mode(&self) -> AxisMode {
        self.mode
    }

    /// Connectors valid in this run
    pub const fn valid_axes(&self) -> AxisSet {
        self.valid_axes
    }

    /// Shapes the generator may place
    pub fn scope(&self) -> &[ShapeId] {
        &self.scope
    }

    /// Compatibility graph over the scope
    pub const fn index(&self) -> &ConnectivityIndex {
        &self.index
    }

    /// Terminal that caps a connector pointing along `axis`
    pub fn terminal_for_axis(&self, axis: Direction) -> Option<ShapeId> {
        self.terminal_for_axis.get(&axis).copied()
    }

    /// Number of terminal shapes in scope
    pub const fn terminal_count(&self) -> usize {
        self.terminal_count
    }

    /// Whether the shape is a dead end
    pub fn is_terminal(&self, shape: ShapeId) -> bool {
        self.catalog.is_terminal(shape)
    }

    /// Valid directions that have a terminal to start from, in table order
    pub fn seed_axes(&self) -> Vec<Direction> {
        self.valid_axes
            .iter()
            .filter(|axis| self.terminal_for_axis.contains_key(axis))
            .collect()
    }
}
