use crate::{
    algorithm::selection::{Candidate, RandomSelector, valid_connections, valid_connections_along},
    algorithm::topology::Topology,
    algorithm::validity::is_valid_at,
    io::configuration::{GenerationParams, GrowthMode, MAX_IDLE_GROWTH_PASSES},
    io::error::{GenerationError, Result},
    io::placement::{Placement, TilePlacer},
    rules::{GenerationRule, RuleContext, linearity::LinearityMatrix, separation::SeparationMatrix},
    spatial::GridStore,
    spatial::direction::{Component, Direction},
    spatial::grid::PlacedTile,
    spatial::tiles::ShapeId,
};
use tracing::{debug, warn};

/// Where a session is in the seed → grow → close cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Empty grid, start tile not placed yet
    #[default]
    Seed,
    /// Open tiles are being extended
    Growing,
    /// Remaining open connectors are being capped
    Terminating,
    /// Every reachable connector is closed
    Done,
}

/// Counters collected while one grid is generated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Growth passes run
    pub growth_passes: usize,
    /// Closing passes run
    pub termination_passes: usize,
    /// Times an open tile had no usable candidate
    pub dead_ends: usize,
    /// Connectors still facing an empty cell after closing
    pub unclosed_axes: usize,
}

/// One generation session: grid, rule matrices, randomness and placer
///
/// Holds all per-run mutable state so independent sessions can coexist.
/// Every placement finishes its store insert, matrix updates and placer
/// call before the next candidate is looked at.
pub struct GenerationSession<P: TilePlacer> {
    /// Catalog-derived, read-only state
    pub topology: Topology,
    /// Run parameters
    pub params: GenerationParams,
    /// Placed tiles
    pub grid: GridStore,
    /// Junction spacing state
    pub separation: SeparationMatrix,
    /// Straight-run state
    pub linearity: LinearityMatrix,
    /// Random number generator for stochastic selection
    pub random_selector: RandomSelector,
    /// Collaborator receiving placements
    pub placer: P,
    /// Placer handles, aligned with the grid store's placement order
    handles: Vec<P::Handle>,
    /// Road (non-terminal) tiles placed in the current run
    structural_placed: usize,
    /// Current phase
    phase: Phase,
    /// Counters for the current run
    stats: PassStats,
}

impl<P: TilePlacer> GenerationSession<P> {
    /// Create a session with validated parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation
    pub fn new(topology: Topology, params: GenerationParams, placer: P, seed: u64) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            topology,
            params,
            grid: GridStore::new(),
            separation: SeparationMatrix::new(),
            linearity: LinearityMatrix::new(),
            random_selector: RandomSelector::new(seed),
            placer,
            handles: Vec::new(),
            structural_placed: 0,
            phase: Phase::Seed,
            stats: PassStats::default(),
        })
    }

    /// Clear the grid, both rule matrices and the placer for a fresh run
    pub fn reset(&mut self) {
        self.grid.reset();
        self.separation.reset();
        self.linearity.reset();
        self.placer.clear();
        self.handles.clear();
        self.structural_placed = 0;
        self.phase = Phase::Seed;
        self.stats = PassStats::default();
    }

    /// Number of placed tiles
    pub const fn size(&self) -> usize {
        self.grid.len()
    }

    /// Number of placed road (non-terminal) tiles
    pub const fn structural_size(&self) -> usize {
        self.structural_placed
    }

    /// Whether `shape` is a dead end
    pub fn is_terminal(&self, shape: ShapeId) -> bool {
        self.topology.is_terminal(shape)
    }

    /// One component of a direction's unit step
    pub const fn axis_offset(direction: Direction, component: Component) -> i32 {
        direction.offset_along(component)
    }

    /// Current phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Counters for the current run
    pub const fn stats(&self) -> PassStats {
        self.stats
    }

    /// Placer handle of the tile at `position`
    pub fn handle(&self, position: [i32; 2]) -> Option<&P::Handle> {
        self.grid
            .slot(position)
            .and_then(|slot| self.handles.get(slot))
    }

    /// Generate one complete grid on top of the current state
    ///
    /// Callers normally [`reset`](Self::reset) first; the driver does.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::TerminationDiverged`] if closing the grid
    /// needs more passes than allowed
    pub fn generate(&mut self) -> Result<()> {
        self.seed();
        self.grow();
        self.terminate()
    }

    /// Place the start terminal at the origin and one road tile off it
    pub fn seed(&mut self) {
        self.phase = Phase::Seed;

        let axes = self.topology.seed_axes();
        let Some(&direction) = self.random_selector.choose(&axes) else {
            warn!("no valid axis has a terminal; nothing to seed");
            return;
        };
        let Some(start_shape) = self.topology.terminal_for_axis(direction) else {
            return;
        };

        let start = Candidate::new(&self.topology, [0, 0], direction, start_shape);
        if !self.place(None, start) {
            return;
        }
        let Some(&start_tile) = self.grid.get([0, 0]) else {
            return;
        };

        let candidates = valid_connections(&self.topology, &self.grid, &start_tile);
        let roads: Vec<Candidate> = candidates
            .iter()
            .copied()
            .filter(|candidate| !self.topology.is_terminal(candidate.shape))
            .collect();
        let pool = if roads.is_empty() { candidates } else { roads };

        match self.pick(&pool) {
            Some(next) => {
                self.place(Some(&start_tile), next);
            }
            None => {
                self.stats.dead_ends += 1;
                debug!(start = %direction, "start tile has no valid connection");
            }
        }
    }

    /// Run growth passes according to the growth mode
    pub fn grow(&mut self) {
        self.phase = Phase::Growing;

        match self.params.growth_mode {
            GrowthMode::Passes => {
                for _ in 0..self.params.depth {
                    if self.budget_reached() {
                        break;
                    }
                    self.grow_pass();
                }
            }
            GrowthMode::Target => {
                let mut idle_passes = 0;
                while !self.budget_reached() {
                    if self.grow_pass() > 0 {
                        idle_passes = 0;
                        continue;
                    }

                    idle_passes += 1;
                    if !self.can_grow() {
                        debug!(size = self.size(), "no open tile can grow; stopping before target");
                        break;
                    }
                    if idle_passes >= MAX_IDLE_GROWTH_PASSES {
                        debug!(
                            size = self.size(),
                            idle_passes, "rules kept every tile idle; stopping before target"
                        );
                        break;
                    }
                }
            }
        }
    }

    /// Extend every open road tile by at most one tile
    ///
    /// Returns the number of tiles placed.
    pub fn grow_pass(&mut self) -> usize {
        self.stats.growth_passes += 1;
        let mut placed = 0;

        for tile in self.grid.open_tiles(self.topology.catalog(), false) {
            if self.budget_reached() {
                break;
            }

            let candidates = valid_connections(&self.topology, &self.grid, &tile);
            let context = RuleContext {
                catalog: self.topology.catalog(),
                params: &self.params,
                separation: &self.separation,
                linearity: &self.linearity,
            };
            let filtered = context.apply(&tile, candidates, &mut self.random_selector);

            let Some(choice) = self.pick(&filtered) else {
                self.stats.dead_ends += 1;
                debug!(x = tile.position[0], y = tile.position[1], "no candidate survives; skipping tile this pass");
                continue;
            };

            if self.place(Some(&tile), choice) {
                placed += 1;
            }
        }

        placed
    }

    /// Cap every open connector, growing where a terminal does not fit
    ///
    /// Loops until a pass places no road tile.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::TerminationDiverged`] if the pass cap is hit
    pub fn terminate(&mut self) -> Result<()> {
        self.phase = Phase::Terminating;

        loop {
            if self.stats.termination_passes >= self.params.max_termination_passes {
                return Err(GenerationError::TerminationDiverged {
                    passes: self.stats.termination_passes,
                });
            }
            self.stats.termination_passes += 1;

            if !self.terminate_pass() {
                break;
            }
        }

        self.stats.unclosed_axes = self.count_unclosed_axes();
        if self.stats.unclosed_axes > 0 {
            warn!(
                unclosed = self.stats.unclosed_axes,
                "some connectors could not be closed"
            );
        }
        self.phase = Phase::Done;
        Ok(())
    }

    /// One closing pass; returns whether a road tile was placed
    fn terminate_pass(&mut self) -> bool {
        let mut repass = false;

        for tile in self.grid.open_tiles(self.topology.catalog(), false) {
            let open: Vec<Direction> = self.grid.open_axes(&tile, self.topology.catalog()).collect();

            for axis in open {
                let target = axis.neighbor(tile.position);
                if self.grid.exists(target) {
                    continue;
                }

                let terminal = self
                    .topology
                    .terminal_for_axis(axis)
                    .filter(|&shape| is_valid_at(&self.topology, &self.grid, shape, target));

                if let Some(shape) = terminal {
                    let cap = Candidate::new(&self.topology, target, axis, shape);
                    self.place(Some(&tile), cap);
                    continue;
                }

                let roads: Vec<Candidate> =
                    valid_connections_along(&self.topology, &self.grid, &tile, axis)
                        .into_iter()
                        .filter(|candidate| !self.topology.is_terminal(candidate.shape))
                        .collect();

                let Some(&road) = self.random_selector.choose(&roads) else {
                    debug!(x = target[0], y = target[1], %axis, "connector cannot be closed");
                    continue;
                };
                if self.place(Some(&tile), road) {
                    repass = true;
                }
            }
        }

        repass
    }

    /// Claim a cell for a candidate and feed back into the rule matrices
    ///
    /// Returns `false` without side effects if the cell is already taken.
    fn place(&mut self, parent: Option<&PlacedTile>, candidate: Candidate) -> bool {
        let generation_axis = parent.map(|_| candidate.axis);
        let tile = PlacedTile::new(candidate.position, candidate.shape, generation_axis);
        if !self.grid.insert(tile) {
            return false;
        }

        let Some(shape) = self.topology.catalog().get(candidate.shape) else {
            return false;
        };
        let handle = self.placer.place(&Placement {
            shape,
            position: candidate.position,
            axis: generation_axis,
            requires_corners: candidate.requires_corners,
        });
        self.handles.push(handle);

        if !shape.terminal {
            self.structural_placed += 1;
        }

        debug!(
            shape = %shape,
            x = candidate.position[0],
            y = candidate.position[1],
            axis = ?generation_axis,
            "placed tile"
        );

        if let Some(parent) = parent {
            self.impact_rule_matrices(parent, &candidate);
        }
        true
    }

    fn impact_rule_matrices(&mut self, parent: &PlacedTile, candidate: &Candidate) {
        for rule in &self.params.rule_priority {
            match rule {
                GenerationRule::Separation => {
                    if self.params.separation.threshold == 0 {
                        continue;
                    }
                    self.separation.record_placement(
                        candidate.position,
                        parent.position,
                        candidate.axis,
                        self.topology.catalog().is_branch(candidate.shape),
                        self.params.separation.radius,
                    );
                }
                GenerationRule::Linearity => {
                    let linearity = &self.params.linearity;
                    if linearity.coefficient <= 0.0 {
                        continue;
                    }
                    self.linearity.record_placement(
                        parent.position,
                        candidate.position,
                        candidate.axis,
                        linearity.coefficient,
                        linearity.decay,
                        &linearity.curve,
                    );
                }
            }
        }
    }

    fn pick(&mut self, candidates: &[Candidate]) -> Option<Candidate> {
        let topology = &self.topology;
        self.random_selector.pick_non_terminal(
            candidates,
            topology.terminal_count(),
            |shape| topology.is_terminal(shape),
        )
    }

    /// Whether some open road tile has a structurally valid candidate, rules aside
    fn can_grow(&self) -> bool {
        self.grid
            .open_tiles(self.topology.catalog(), false)
            .iter()
            .any(|tile| !valid_connections(&self.topology, &self.grid, tile).is_empty())
    }

    fn budget_reached(&self) -> bool {
        self.structural_placed as f64 >= self.params.target_tiles()
    }

    fn count_unclosed_axes(&self) -> usize {
        let catalog = self.topology.catalog();
        self.grid
            .open_tiles(catalog, true)
            .iter()
            .map(|tile| self.grid.open_axes(tile, catalog).count())
            .sum()
    }
}
