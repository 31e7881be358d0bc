//! Placement collaborator seam
//!
//! The generator decides where tiles go; a [`TilePlacer`] turns each decision
//! into whatever the host needs (sprites, entities, a log). The generator only
//! keeps the returned handle next to its own record of the tile.

use crate::io::error::{GenerationError, Result, file_system_error};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::TileShape;
use serde::Serialize;
use std::path::Path;

/// One accepted placement as seen by the collaborator
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    /// Shape being placed
    pub shape: &'a TileShape,
    /// World coordinates `[x, y]`
    pub position: [i32; 2],
    /// Direction the tile was grown along; `None` for the start tile
    pub axis: Option<Direction>,
    /// Whether cosmetic corner pieces belong next to this tile
    pub requires_corners: bool,
}

/// Receives every tile the generator places
pub trait TilePlacer {
    /// Host-side handle for a placed tile
    type Handle;

    /// Materialise one placement
    fn place(&mut self, placement: &Placement<'_>) -> Self::Handle;

    /// Drop everything placed so far, called when a run is discarded
    fn clear(&mut self) {}
}

/// Placer that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPlacer;

impl TilePlacer for NullPlacer {
    type Handle = ();

    fn place(&mut self, _placement: &Placement<'_>) -> Self::Handle {}
}

/// Serializable record of one placement
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlacementRecord {
    /// Shape name
    pub shape: String,
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
    /// Growth direction, absent for the start tile
    pub axis: Option<Direction>,
    /// Corner pieces required
    pub requires_corners: bool,
    /// Visual handle copied from the shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,
}

/// Placer that keeps a log of every placement
#[derive(Clone, Debug, Default)]
pub struct PlacementLog {
    records: Vec<PlacementRecord>,
}

impl PlacementLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements in the order they happened
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    /// Serialize the log as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.records).map_err(|source| {
            GenerationError::Serialization {
                what: "placements",
                source,
            }
        })
    }

    /// Write the log to `path` as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|source| file_system_error(path, "write placements", source))
    }
}

impl TilePlacer for PlacementLog {
    type Handle = usize;

    fn place(&mut self, placement: &Placement<'_>) -> Self::Handle {
        self.records.push(PlacementRecord {
            shape: placement.shape.name.clone(),
            x: placement.position[0],
            y: placement.position[1],
            axis: placement.axis,
            requires_corners: placement.requires_corners,
            visual: placement.shape.visual.clone(),
        });
        self.records.len() - 1
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}
