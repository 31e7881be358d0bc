//! JSON catalog files
//!
//! ```json
//! { "shapes": [
//!     { "name": "Straight", "axes": ["up", "down"] },
//!     { "name": "EndUp", "axes": ["up"], "terminal": true }
//! ] }
//! ```
//!
//! Axis names go through [`Direction::from_str`], so a typo fails the load
//! instead of producing a connector that points nowhere.

use crate::io::error::{GenerationError, Result, file_system_error};
use crate::spatial::direction::{AxisSet, Direction};
use crate::spatial::tiles::{TileCatalog, TileShape};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    shapes: Vec<ShapeRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ShapeRecord {
    name: String,
    axes: Vec<String>,
    #[serde(default)]
    terminal: bool,
    #[serde(default)]
    corner: bool,
    #[serde(default)]
    visual: Option<String>,
}

impl ShapeRecord {
    fn into_shape(self) -> Result<TileShape> {
        let axes = self
            .axes
            .iter()
            .map(|name| Direction::from_str(name))
            .collect::<Result<AxisSet>>()?;

        Ok(TileShape {
            name: self.name,
            axes,
            terminal: self.terminal,
            corner: self.corner,
            visual: self.visual,
        })
    }
}

/// Parse a catalog from JSON text
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a valid catalog document
/// - An axis name is unknown
/// - The shapes fail catalog validation
pub fn parse_catalog(json: &str, origin: &Path) -> Result<TileCatalog> {
    let file: CatalogFile =
        serde_json::from_str(json).map_err(|source| GenerationError::CatalogFormat {
            path: origin.to_path_buf(),
            source,
        })?;

    let shapes = file
        .shapes
        .into_iter()
        .map(ShapeRecord::into_shape)
        .collect::<Result<Vec<_>>>()?;

    TileCatalog::new(shapes)
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse into a
/// valid catalog
pub fn load_catalog(path: &Path) -> Result<TileCatalog> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| file_system_error(path, "read catalog", source))?;
    parse_catalog(&json, path)
}
