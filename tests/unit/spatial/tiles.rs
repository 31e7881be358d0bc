//! Tests for tile shape descriptors and catalog validation

#[cfg(test)]
mod tests {
    use roadtile::GenerationError;
    use roadtile::spatial::direction::{AxisSet, Direction};
    use roadtile::spatial::tiles::{ShapeId, TileCatalog, TileShape};

    // Tests shape classification helpers
    #[test]
    fn test_shape_flags() {
        let straight = TileShape::new("Straight", &[Direction::Up, Direction::Down]);
        assert!(!straight.terminal);
        assert!(!straight.is_branch());
        assert!(!straight.is_diagonal());
        assert!(straight.exposes(Direction::Up));

        let junction = TileShape::new("T", &[Direction::Up, Direction::Left, Direction::Right]);
        assert!(junction.is_branch());

        let end = TileShape::terminal("End", Direction::UpLeft).with_visual("end.png");
        assert!(end.terminal);
        assert!(end.is_diagonal());
        assert_eq!(end.visual.as_deref(), Some("end.png"));
        assert_eq!(end.to_string(), "End");
    }

    // Tests lookups by id and by name
    #[test]
    fn test_catalog_lookup() {
        let catalog = TileCatalog::new(vec![
            TileShape::new("Straight", &[Direction::Up, Direction::Down]),
            TileShape::terminal("EndUp", Direction::Up),
        ])
        .expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("EndUp"), Some(ShapeId(1)));
        assert_eq!(catalog.find("Missing"), None);
        assert!(catalog.is_terminal(ShapeId(1)));
        assert!(!catalog.is_terminal(ShapeId(0)));
        assert_eq!(
            catalog.axes_of(ShapeId(0)),
            AxisSet::from_directions(&[Direction::Up, Direction::Down])
        );
        assert!(catalog.get(ShapeId(7)).is_none());
        assert!(catalog.axes_of(ShapeId(7)).is_empty());
    }

    // Tests each malformed catalog is rejected
    // Verified by removing the duplicate-name check
    #[test]
    fn test_catalog_validation_rejects_malformed_shapes() {
        let cases = vec![
            vec![
                TileShape::new("A", &[Direction::Up, Direction::Down]),
                TileShape::new("A", &[Direction::Left, Direction::Right]),
            ],
            vec![TileShape::new("Empty", &[])],
            vec![TileShape::new(" ", &[Direction::Up])],
            vec![TileShape {
                terminal: true,
                ..TileShape::new("WideEnd", &[Direction::Up, Direction::Down])
            }],
            vec![TileShape::terminal("CornerEnd", Direction::Up).as_corner()],
        ];

        for shapes in cases {
            let names: Vec<String> = shapes.iter().map(|shape| shape.name.clone()).collect();
            assert!(
                matches!(TileCatalog::new(shapes), Err(GenerationError::InvalidCatalog { .. })),
                "catalog {names:?} should be rejected"
            );
        }
    }

    // Tests the standard square catalog holds every connector subset of size two or more
    // Verified by starting the subset mask at 3
    #[test]
    fn test_standard_square_catalog() {
        let catalog = TileCatalog::standard(AxisSet::CARDINAL);

        // 6 pairs + 4 triples + 1 cross + 4 terminals
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.iter().filter(|(_, shape)| shape.terminal).count(), 4);
        assert!(catalog.iter().all(|(_, shape)| shape.axes.is_subset(AxisSet::CARDINAL)));
        assert!(catalog.find("EndUp").is_some());

        let cross = catalog
            .iter()
            .find(|(_, shape)| shape.axes == AxisSet::CARDINAL)
            .map(|(id, _)| id);
        assert!(cross.is_some_and(|id| catalog.is_branch(id)));
    }

    // Tests the combined catalog keeps the two families apart
    #[test]
    fn test_standard_catalog_for_both_families() {
        let catalog = TileCatalog::standard(AxisSet::ALL);

        assert_eq!(catalog.len(), 30);
        assert!(catalog.iter().all(|(_, shape)| {
            shape.axes.is_subset(AxisSet::CARDINAL) || shape.axes.is_subset(AxisSet::DIAGONAL)
        }));
        assert_eq!(catalog.iter().filter(|(id, _)| catalog.is_diagonal(*id)).count(), 15);
    }
}
