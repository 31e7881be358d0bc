//! Tests for junction spacing

#[cfg(test)]
mod tests {
    use roadtile::algorithm::selection::Candidate;
    use roadtile::rules::separation::SeparationMatrix;
    use roadtile::spatial::direction::Direction;
    use roadtile::spatial::tiles::ShapeId;

    const ROAD: ShapeId = ShapeId(0);
    const JUNCTION: ShapeId = ShapeId(1);

    fn candidate(position: [i32; 2], shape: ShapeId) -> Candidate {
        Candidate {
            position,
            axis: Direction::Up,
            shape,
            requires_corners: false,
        }
    }

    // Tests a junction marks its cell and counts outward along the orthogonals
    // Verified by propagating along the placement axis instead
    #[test]
    fn test_branch_placement_marks_orthogonal_neighbourhood() {
        let mut matrix = SeparationMatrix::new();
        matrix.record_placement([0, 0], [0, -1], Direction::Up, true, 2);

        assert_eq!(matrix.get([0, 0]), Some(0));
        assert_eq!(matrix.get([-1, 0]), Some(1));
        assert_eq!(matrix.get([1, 0]), Some(1));
        assert_eq!(matrix.get([-2, 0]), Some(2));
        assert_eq!(matrix.get([2, 0]), Some(2));
        assert_eq!(matrix.get([0, 1]), None);
        assert_eq!(matrix.get([3, 0]), None);
        assert_eq!(matrix.len(), 5);
    }

    // Tests plain roads extend the count of their parent
    #[test]
    fn test_road_placement_inherits_parent_plus_one() {
        let mut matrix = SeparationMatrix::new();
        matrix.record_placement([0, 0], [0, -1], Direction::Up, true, 1);
        matrix.record_placement([0, 1], [0, 0], Direction::Up, false, 1);
        matrix.record_placement([0, 2], [0, 1], Direction::Up, false, 1);

        assert_eq!(matrix.get([0, 1]), Some(1));
        assert_eq!(matrix.get([0, 2]), Some(2));
    }

    // Tests roads far from any junction leave the matrix untouched
    #[test]
    fn test_unconstrained_roads_record_nothing() {
        let mut matrix = SeparationMatrix::new();
        matrix.record_placement([0, 1], [0, 0], Direction::Up, false, 3);

        assert!(matrix.is_empty());
        assert_eq!(matrix.separation_for([0, 2], [0, 1]), None);
    }

    // Tests the recorded value never grows once lowered
    #[test]
    fn test_values_only_decrease() {
        let mut matrix = SeparationMatrix::new();
        matrix.record_placement([0, 0], [0, -1], Direction::Up, true, 2);
        matrix.record_placement([2, 2], [2, 1], Direction::Up, true, 2);
        matrix.record_placement([2, 0], [1, 0], Direction::Right, true, 2);

        assert_eq!(matrix.get([2, 0]), Some(0));
        assert_eq!(matrix.separation_for([1, 0], [2, 0]), Some(1));
    }

    // Tests junction candidates too close to a branch are dropped and roads always pass
    // Verified by filtering every candidate regardless of shape
    #[test]
    fn test_filter_only_drops_close_junctions() {
        let mut matrix = SeparationMatrix::new();
        matrix.record_placement([0, 0], [0, -1], Direction::Up, true, 2);

        let candidates = vec![candidate([0, 1], ROAD), candidate([0, 1], JUNCTION)];
        let is_branch = |shape: ShapeId| shape == JUNCTION;

        let kept = matrix.filter(candidates.clone(), [0, 0], 2, is_branch);
        assert_eq!(kept, vec![candidate([0, 1], ROAD)]);

        let distant = matrix.filter(candidates.clone(), [0, 0], 1, is_branch);
        assert_eq!(distant.len(), 2);

        let disabled = matrix.filter(candidates, [0, 0], 0, is_branch);
        assert_eq!(disabled.len(), 2);
    }

    // Tests unset cells never filter
    #[test]
    fn test_unset_cells_never_filter() {
        let matrix = SeparationMatrix::new();
        let kept = matrix.filter(vec![candidate([5, 5], JUNCTION)], [5, 4], 10, |_| true);
        assert_eq!(kept.len(), 1);
    }

    // Tests reset forgets everything
    #[test]
    fn test_reset() {
        let mut matrix = SeparationMatrix::new();
        matrix.record_placement([0, 0], [0, -1], Direction::Up, true, 2);
        matrix.reset();
        assert!(matrix.is_empty());
    }
}
