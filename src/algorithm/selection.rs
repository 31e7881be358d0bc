use crate::algorithm::topology::Topology;
use crate::algorithm::validity::is_valid_at;
use crate::spatial::GridStore;
use crate::spatial::direction::Direction;
use crate::spatial::grid::PlacedTile;
use crate::spatial::tiles::ShapeId;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Proposed tile growing out of a placed parent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Target cell
    pub position: [i32; 2],
    /// Direction from the parent to the target cell
    pub axis: Direction,
    /// Shape to place
    pub shape: ShapeId,
    /// Diagonal-family shapes need cosmetic corner pieces
    pub requires_corners: bool,
}

impl Candidate {
    /// Build a candidate, deriving the corner requirement from the shape
    pub fn new(topology: &Topology, position: [i32; 2], axis: Direction, shape: ShapeId) -> Self {
        Self {
            position,
            axis,
            shape,
            requires_corners: topology.catalog().is_diagonal(shape),
        }
    }
}

/// Every structurally valid tile that could grow out of `tile`
///
/// Walks the tile's connectors in table order and, for each connector whose
/// neighbouring cell is empty, the compatible shapes in id order.
pub fn valid_connections(
    topology: &Topology,
    grid: &GridStore,
    tile: &PlacedTile,
) -> Vec<Candidate> {
    topology
        .catalog()
        .axes_of(tile.shape)
        .iter()
        .flat_map(|axis| valid_connections_along(topology, grid, tile, axis))
        .collect()
}

/// Valid tiles that could grow out of `tile` across a single connector
pub fn valid_connections_along(
    topology: &Topology,
    grid: &GridStore,
    tile: &PlacedTile,
    axis: Direction,
) -> Vec<Candidate> {
    let target = axis.neighbor(tile.position);
    if grid.exists(target) {
        return Vec::new();
    }

    topology
        .index()
        .connections(tile.shape, axis)
        .filter(|&shape| is_valid_at(topology, grid, shape, target))
        .map(|shape| Candidate::new(topology, target, axis, shape))
        .collect()
}

/// Seeded random source for every stochastic choice of a run
///
/// All draws go through this type so that a fixed seed reproduces the
/// same sequence of choices.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, 1)`
    pub fn sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform index into a collection of `len` items
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniform choice from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).and_then(|index| items.get(index))
    }

    /// Uniform choice that steers away from terminal shapes
    ///
    /// A terminal draw is redrawn up to `retries` times; the last draw is
    /// accepted whatever it is, so all-terminal sets still make progress.
    pub fn pick_non_terminal(
        &mut self,
        candidates: &[Candidate],
        retries: usize,
        is_terminal: impl Fn(ShapeId) -> bool,
    ) -> Option<Candidate> {
        let mut pick = *self.choose(candidates)?;
        let mut attempts = 0;
        while is_terminal(pick.shape) && attempts < retries {
            pick = *self.choose(candidates)?;
            attempts += 1;
        }
        Some(pick)
    }
}
