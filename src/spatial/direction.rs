//! Closed direction set with total opposite and offset tables
//!
//! Directions double as tile connectors ("axes"). Every lookup is a `match`
//! over the enum, so a direction without an opposite or an offset cannot exist.

use crate::io::error::{GenerationError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A grid direction, also used as a tile connector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Positive y
    Up,
    /// Negative y
    Down,
    /// Negative x
    Left,
    /// Positive x
    Right,
    /// Positive x, positive y
    UpRight,
    /// Negative x, positive y
    UpLeft,
    /// Positive x, negative y
    DownRight,
    /// Negative x, negative y
    DownLeft,
}

/// Component selector for [`Direction::offset_along`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    /// Horizontal component
    X,
    /// Vertical component
    Y,
}

impl Direction {
    /// The four axis-aligned directions
    pub const CARDINAL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The four diagonal directions
    pub const DIAGONAL: [Self; 4] = [Self::UpRight, Self::UpLeft, Self::DownRight, Self::DownLeft];

    /// Every direction in table order
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpRight,
        Self::UpLeft,
        Self::DownRight,
        Self::DownLeft,
    ];

    /// Position of this direction in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::UpRight => 4,
            Self::UpLeft => 5,
            Self::DownRight => 6,
            Self::DownLeft => 7,
        }
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpRight => Self::DownLeft,
            Self::UpLeft => Self::DownRight,
            Self::DownRight => Self::UpLeft,
            Self::DownLeft => Self::UpRight,
        }
    }

    /// Unit step `[dx, dy]` for this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [0, 1],
            Self::Down => [0, -1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
            Self::UpRight => [1, 1],
            Self::UpLeft => [-1, 1],
            Self::DownRight => [1, -1],
            Self::DownLeft => [-1, -1],
        }
    }

    /// One component of the unit step
    pub const fn offset_along(self, component: Component) -> i32 {
        let [dx, dy] = self.offset();
        match component {
            Component::X => dx,
            Component::Y => dy,
        }
    }

    /// Whether this is one of the four diagonal directions
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpRight | Self::UpLeft | Self::DownRight | Self::DownLeft
        )
    }

    /// The two directions perpendicular to this one
    pub const fn orthogonal(self) -> [Self; 2] {
        match self {
            Self::Up | Self::Down => [Self::Left, Self::Right],
            Self::Left | Self::Right => [Self::Up, Self::Down],
            Self::UpRight | Self::DownLeft => [Self::UpLeft, Self::DownRight],
            Self::UpLeft | Self::DownRight => [Self::UpRight, Self::DownLeft],
        }
    }

    /// Position reached after `distance` steps from `position`
    pub const fn step(self, position: [i32; 2], distance: i32) -> [i32; 2] {
        let [dx, dy] = self.offset();
        [position[0] + dx * distance, position[1] + dy * distance]
    }

    /// Neighbouring position one step away
    pub const fn neighbor(self, position: [i32; 2]) -> [i32; 2] {
        self.step(position, 1)
    }

    /// Lowercase connector name as used in catalog files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpRight => "upright",
            Self::UpLeft => "upleft",
            Self::DownRight => "downright",
            Self::DownLeft => "downleft",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], "");
        Self::ALL
            .into_iter()
            .find(|direction| direction.name() == normalized)
            .ok_or_else(|| GenerationError::InvalidAxis {
                name: s.to_string(),
            })
    }
}

/// Small set of directions stored as a bitmask
///
/// Iteration always follows [`Direction::ALL`] order, which keeps candidate
/// enumeration deterministic for a given seed.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AxisSet(u8);

impl AxisSet {
    /// Set with no directions
    pub const EMPTY: Self = Self(0);
    /// The four cardinal directions
    pub const CARDINAL: Self = Self(0b0000_1111);
    /// The four diagonal directions
    pub const DIAGONAL: Self = Self(0b1111_0000);
    /// All eight directions
    pub const ALL: Self = Self(0b1111_1111);

    const fn bit(direction: Direction) -> u8 {
        1 << direction.index()
    }

    /// Build a set from a list of directions
    pub fn from_directions(directions: &[Direction]) -> Self {
        directions.iter().copied().collect()
    }

    /// Add a direction
    pub const fn insert(&mut self, direction: Direction) {
        self.0 |= Self::bit(direction);
    }

    /// Membership test
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & Self::bit(direction) != 0
    }

    /// Whether every member of `self` is also in `other`
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Whether the sets share a direction
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of directions in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set has no directions
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in table order
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }

    /// Sole member of a single-direction set
    pub fn single(self) -> Option<Direction> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }
}

impl FromIterator<Direction> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl fmt::Debug for AxisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Which connector family a run may use
///
/// Mirrors the "square only" / "diagonal only" switches: neither switch means
/// both families are in play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisMode {
    /// Cardinal connectors only
    Square,
    /// Diagonal connectors only
    Diagonal,
    /// Cardinal and diagonal connectors
    #[default]
    Both,
}

impl AxisMode {
    /// Resolve the mode from the two exclusive switches
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::ConflictingAxisMode`] when both switches are set
    pub const fn from_flags(square_only: bool, diagonal_only: bool) -> Result<Self> {
        match (square_only, diagonal_only) {
            (true, true) => Err(GenerationError::ConflictingAxisMode),
            (true, false) => Ok(Self::Square),
            (false, true) => Ok(Self::Diagonal),
            (false, false) => Ok(Self::Both),
        }
    }

    /// Directions valid for this mode
    pub const fn valid_axes(self) -> AxisSet {
        match self {
            Self::Square => AxisSet::CARDINAL,
            Self::Diagonal => AxisSet::DIAGONAL,
            Self::Both => AxisSet::ALL,
        }
    }
}
