//! Tests for direction tables, connector sets and axis modes

#[cfg(test)]
mod tests {
    use roadtile::GenerationError;
    use roadtile::spatial::direction::{AxisMode, AxisSet, Component, Direction};

    // Tests every direction's opposite points back to it and cancels its offset
    // Verified by swapping the opposites of UpLeft and UpRight
    #[test]
    fn test_opposite_is_an_involution_that_negates_offset() {
        for direction in Direction::ALL {
            let opposite = direction.opposite();
            assert_eq!(opposite.opposite(), direction);
            assert_ne!(opposite, direction);

            let [dx, dy] = direction.offset();
            assert_eq!(opposite.offset(), [-dx, -dy], "{direction} vs {opposite}");
        }
    }

    // Tests offsets are unit steps, with up pointing toward positive y
    #[test]
    fn test_offsets_are_unit_steps() {
        assert_eq!(Direction::Up.offset(), [0, 1]);
        assert_eq!(Direction::Right.offset(), [1, 0]);
        assert_eq!(Direction::DownLeft.offset(), [-1, -1]);

        for direction in Direction::ALL {
            let [dx, dy] = direction.offset();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert_eq!(dx != 0 && dy != 0, direction.is_diagonal());
        }
    }

    // Tests component lookup matches the offset table
    #[test]
    fn test_offset_along_components() {
        assert_eq!(Direction::UpLeft.offset_along(Component::X), -1);
        assert_eq!(Direction::UpLeft.offset_along(Component::Y), 1);
        assert_eq!(Direction::Down.offset_along(Component::X), 0);
    }

    // Tests orthogonal directions are perpendicular to the axis
    // Verified by returning the axis itself among the orthogonals
    #[test]
    fn test_orthogonal_directions_are_perpendicular() {
        for direction in Direction::ALL {
            let [dx, dy] = direction.offset();
            for orthogonal in direction.orthogonal() {
                let [ox, oy] = orthogonal.offset();
                assert_eq!(dx * ox + dy * oy, 0, "{direction} vs {orthogonal}");
                assert_eq!(orthogonal.is_diagonal(), direction.is_diagonal());
            }
        }
    }

    // Tests stepping several cells along a direction
    #[test]
    fn test_step_and_neighbor() {
        assert_eq!(Direction::Left.step([3, 4], 3), [0, 4]);
        assert_eq!(Direction::DownRight.neighbor([0, 0]), [1, -1]);
    }

    // Tests parsing accepts catalog spellings and rejects unknown names
    // Verified by dropping the separator normalisation
    #[test]
    fn test_from_str_parses_names() {
        assert_eq!("up".parse::<Direction>().ok(), Some(Direction::Up));
        assert_eq!("Down_Left".parse::<Direction>().ok(), Some(Direction::DownLeft));
        assert_eq!("up-right".parse::<Direction>().ok(), Some(Direction::UpRight));

        let error = "north".parse::<Direction>().expect_err("unknown name parsed");
        assert!(matches!(error, GenerationError::InvalidAxis { ref name } if name == "north"));
    }

    // Tests display round-trips through parsing
    #[test]
    fn test_display_parses_back() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().ok(), Some(direction));
        }
    }

    // Tests set operations and table-order iteration
    #[test]
    fn test_axis_set_operations() {
        let set = AxisSet::from_directions(&[Direction::Right, Direction::Up, Direction::Right]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Direction::Up));
        assert!(!set.contains(Direction::Down));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Up, Direction::Right]);
        assert!(set.is_subset(AxisSet::CARDINAL));
        assert!(!set.intersects(AxisSet::DIAGONAL));
        assert_eq!(set.single(), None);
        assert_eq!(AxisSet::from_directions(&[Direction::Left]).single(), Some(Direction::Left));
        assert!(AxisSet::EMPTY.is_empty());
        assert_eq!(AxisSet::ALL.len(), 8);
    }

    // Tests the two exclusive switches resolve to a mode and reject both at once
    // Verified by letting square-only win when both are set
    #[test]
    fn test_axis_mode_from_flags() {
        assert_eq!(AxisMode::from_flags(false, false).ok(), Some(AxisMode::Both));
        assert_eq!(AxisMode::from_flags(true, false).ok(), Some(AxisMode::Square));
        assert_eq!(AxisMode::from_flags(false, true).ok(), Some(AxisMode::Diagonal));
        assert!(matches!(
            AxisMode::from_flags(true, true),
            Err(GenerationError::ConflictingAxisMode)
        ));

        assert_eq!(AxisMode::Square.valid_axes(), AxisSet::CARDINAL);
        assert_eq!(AxisMode::Diagonal.valid_axes(), AxisSet::DIAGONAL);
        assert_eq!(AxisMode::Both.valid_axes(), AxisSet::ALL);
    }
}
