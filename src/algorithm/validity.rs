use crate::algorithm::topology::Topology;
use crate::spatial::GridStore;
use crate::spatial::tiles::ShapeId;

/// Check whether `shape` can occupy `position` given its current neighbours
///
/// A shape exposing a connector outside the run's valid set is rejected
/// outright. Every valid direction is then checked against the neighbour in
/// that direction, if one exists:
/// - neither side declares a connection across the shared edge: the tiles run
///   parallel and do not interact
/// - otherwise the neighbour must seek the candidate and the candidate must
///   expose the matching connector
pub fn is_valid_at(
    topology: &Topology,
    grid: &GridStore,
    shape: ShapeId,
    position: [i32; 2],
) -> bool {
    let axes = topology.catalog().axes_of(shape);
    if axes.is_empty() || !axes.is_subset(topology.valid_axes()) {
        return false;
    }

    let index = topology.index();
    topology.valid_axes().iter().all(|axis| {
        let Some(existing) = grid.get(axis.neighbor(position)) else {
            return true;
        };

        let existing_seeks = index.seeks(existing.shape, axis.opposite());
        let candidate_seeks = index.seeks(shape, axis);
        if !existing_seeks && !candidate_seeks {
            return true;
        }

        existing_seeks && axes.contains(axis)
    })
}
