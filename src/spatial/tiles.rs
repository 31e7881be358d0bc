//! Tile shapes and the catalog they are loaded into
//!
//! Shapes are immutable once the catalog is built and are referred to by
//! [`ShapeId`] everywhere else, so a run shares one copy of every descriptor.

use crate::io::error::{GenerationError, Result};
use crate::spatial::direction::{AxisSet, Direction};
use std::collections::HashMap;
use std::fmt;

/// Index of a shape within its [`TileCatalog`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub usize);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Descriptor for one kind of road tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileShape {
    /// Unique name
    pub name: String,
    /// Connectors the tile exposes
    pub axes: AxisSet,
    /// Dead-end shape used to close a single connector
    pub terminal: bool,
    /// Cosmetic corner piece, never placed by the generator
    pub corner: bool,
    /// Opaque handle handed to the placement collaborator
    pub visual: Option<String>,
}

impl TileShape {
    /// Create a plain, non-terminal shape
    pub fn new(name: impl Into<String>, axes: &[Direction]) -> Self {
        Self {
            name: name.into(),
            axes: AxisSet::from_directions(axes),
            terminal: false,
            corner: false,
            visual: None,
        }
    }

    /// Create a dead-end shape exposing a single connector
    pub fn terminal(name: impl Into<String>, axis: Direction) -> Self {
        Self {
            terminal: true,
            ..Self::new(name, &[axis])
        }
    }

    /// Mark the shape as a cosmetic corner piece
    #[must_use]
    pub const fn as_corner(mut self) -> Self {
        self.corner = true;
        self
    }

    /// Attach a visual handle
    #[must_use]
    pub fn with_visual(mut self, visual: impl Into<String>) -> Self {
        self.visual = Some(visual.into());
        self
    }

    /// Whether the shape exposes `axis`
    pub const fn exposes(&self, axis: Direction) -> bool {
        self.axes.contains(axis)
    }

    /// Junction shapes with more than two connectors
    pub const fn is_branch(&self) -> bool {
        self.axes.len() > 2
    }

    /// Shapes in the diagonal family need corner pieces when placed
    pub const fn is_diagonal(&self) -> bool {
        self.axes.intersects(AxisSet::DIAGONAL)
    }
}

impl fmt::Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Validated set of tile shapes
#[derive(Clone, Debug)]
pub struct TileCatalog {
    shapes: Vec<TileShape>,
    by_name: HashMap<String, ShapeId>,
}

impl TileCatalog {
    /// Build a catalog, checking names and connector declarations
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidCatalog`] if:
    /// - Two shapes share a name or a name is empty
    /// - A shape exposes no connectors
    /// - A terminal shape exposes anything but exactly one connector
    /// - A shape is flagged as both terminal and corner
    pub fn new(shapes: Vec<TileShape>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(shapes.len());

        for (index, shape) in shapes.iter().enumerate() {
            if shape.name.trim().is_empty() {
                return Err(invalid_catalog(format!("shape #{index} has an empty name")));
            }
            if shape.axes.is_empty() {
                return Err(invalid_catalog(format!(
                    "shape '{}' exposes no axes",
                    shape.name
                )));
            }
            if shape.terminal && shape.axes.len() != 1 {
                return Err(invalid_catalog(format!(
                    "terminal shape '{}' must expose exactly one axis, found {}",
                    shape.name,
                    shape.axes.len()
                )));
            }
            if shape.terminal && shape.corner {
                return Err(invalid_catalog(format!(
                    "shape '{}' cannot be both terminal and corner",
                    shape.name
                )));
            }
            if by_name.insert(shape.name.clone(), ShapeId(index)).is_some() {
                return Err(invalid_catalog(format!(
                    "shape name '{}' is used more than once",
                    shape.name
                )));
            }
        }

        Ok(Self { shapes, by_name })
    }

    /// Every connector subset of size two or more, plus one terminal per axis
    ///
    /// Covers the cardinal family, the diagonal family, or both. Names are
    /// built from the connectors, e.g. `UpDownLeft`; terminals are named
    /// `End` followed by the connector they expose.
    pub fn standard(family: AxisSet) -> Self {
        let mut shapes = Vec::new();

        for group in [AxisSet::CARDINAL, AxisSet::DIAGONAL] {
            if !group.is_subset(family) {
                continue;
            }
            let members: Vec<Direction> = group.iter().collect();
            for mask in 1_u32..(1 << members.len()) {
                let axes: Vec<Direction> = members
                    .iter()
                    .enumerate()
                    .filter(|&(bit, _)| mask & (1_u32 << bit) != 0)
                    .map(|(_, &direction)| direction)
                    .collect();
                if axes.len() >= 2 {
                    shapes.push(TileShape::new(shape_name(&axes), &axes));
                }
            }
            for &axis in &members {
                shapes.push(TileShape::terminal(
                    format!("End{}", shape_name(&[axis])),
                    axis,
                ));
            }
        }

        // Generated names are unique and non-empty by construction
        let by_name = shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| (shape.name.clone(), ShapeId(index)))
            .collect();

        Self { shapes, by_name }
    }

    /// Look up a shape by id
    pub fn get(&self, id: ShapeId) -> Option<&TileShape> {
        self.shapes.get(id.0)
    }

    /// Look up a shape id by name
    pub fn find(&self, name: &str) -> Option<ShapeId> {
        self.by_name.get(name).copied()
    }

    /// Connectors of a shape, empty for unknown ids
    pub fn axes_of(&self, id: ShapeId) -> AxisSet {
        self.get(id).map_or(AxisSet::EMPTY, |shape| shape.axes)
    }

    /// Whether the shape is a dead end
    pub fn is_terminal(&self, id: ShapeId) -> bool {
        self.get(id).is_some_and(|shape| shape.terminal)
    }

    /// Whether the shape is a junction
    pub fn is_branch(&self, id: ShapeId) -> bool {
        self.get(id).is_some_and(TileShape::is_branch)
    }

    /// Whether the shape belongs to the diagonal family
    pub fn is_diagonal(&self, id: ShapeId) -> bool {
        self.get(id).is_some_and(TileShape::is_diagonal)
    }

    /// Shapes with their ids in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &TileShape)> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| (ShapeId(index), shape))
    }

    /// Number of shapes
    pub const fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the catalog holds no shapes
    pub const fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn shape_name(axes: &[Direction]) -> String {
    axes.iter()
        .map(|axis| match axis {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::UpRight => "UpRight",
            Direction::UpLeft => "UpLeft",
            Direction::DownRight => "DownRight",
            Direction::DownLeft => "DownLeft",
        })
        .collect()
}

fn invalid_catalog(reason: String) -> GenerationError {
    GenerationError::InvalidCatalog { reason }
}
