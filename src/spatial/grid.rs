//! Sparse grid of placed road tiles
//!
//! Tiles live in an insertion-ordered arena with a coordinate index on the
//! side. The arena order is what makes open-tile enumeration reproducible,
//! and a coordinate can only ever be claimed once per run.

use crate::spatial::direction::Direction;
use crate::spatial::tiles::{ShapeId, TileCatalog};
use std::collections::HashMap;

/// A tile that has been placed on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedTile {
    /// World coordinates `[x, y]`
    pub position: [i32; 2],
    /// Shape occupying the cell
    pub shape: ShapeId,
    /// Direction the tile was grown along, `None` for the start tile
    pub generation_axis: Option<Direction>,
}

impl PlacedTile {
    /// Create a tile record
    pub const fn new(position: [i32; 2], shape: ShapeId, generation_axis: Option<Direction>) -> Self {
        Self {
            position,
            shape,
            generation_axis,
        }
    }
}

/// Coordinate-keyed store of placed tiles
#[derive(Debug, Clone, Default)]
pub struct GridStore {
    tiles: Vec<PlacedTile>,
    slots: HashMap<[i32; 2], usize>,
}

impl GridStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tile occupies `position`
    pub fn exists(&self, position: [i32; 2]) -> bool {
        self.slots.contains_key(&position)
    }

    /// Tile at `position`, if any
    pub fn get(&self, position: [i32; 2]) -> Option<&PlacedTile> {
        self.slots
            .get(&position)
            .and_then(|&slot| self.tiles.get(slot))
    }

    /// Arena slot of the tile at `position`
    pub fn slot(&self, position: [i32; 2]) -> Option<usize> {
        self.slots.get(&position).copied()
    }

    /// Claim the tile's coordinate
    ///
    /// Returns `false` and leaves the store untouched when the coordinate is
    /// already occupied.
    pub fn insert(&mut self, tile: PlacedTile) -> bool {
        if self.exists(tile.position) {
            return false;
        }
        self.slots.insert(tile.position, self.tiles.len());
        self.tiles.push(tile);
        true
    }

    /// Number of placed tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether nothing has been placed
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Placed tiles in placement order
    pub fn iter(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.iter()
    }

    /// Connectors of `tile` whose neighbouring cell is still empty
    pub fn open_axes<'a>(
        &'a self,
        tile: &PlacedTile,
        catalog: &TileCatalog,
    ) -> impl Iterator<Item = Direction> + use<'a> {
        let position = tile.position;
        catalog
            .axes_of(tile.shape)
            .iter()
            .filter(move |axis| !self.exists(axis.neighbor(position)))
    }

    /// Tiles with at least one connector facing an empty cell
    ///
    /// Terminal tiles are closed by definition and are skipped unless
    /// `include_terminals` is set. The result is a snapshot in placement
    /// order, so callers may keep inserting while walking it.
    pub fn open_tiles(&self, catalog: &TileCatalog, include_terminals: bool) -> Vec<PlacedTile> {
        self.tiles
            .iter()
            .filter(|tile| include_terminals || !catalog.is_terminal(tile.shape))
            .filter(|tile| self.open_axes(tile, catalog).next().is_some())
            .copied()
            .collect()
    }

    /// Remove every tile
    pub fn reset(&mut self) {
        self.tiles.clear();
        self.slots.clear();
    }
}
