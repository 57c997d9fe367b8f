//! Tests for bounded breadth-first shape enumeration

#[cfg(test)]
mod tests {
    use islandcover::algorithm::shapes::{Shape, ShapeCatalog, enumerate_shapes};
    use islandcover::io::configuration::IslandConfig;
    use islandcover::io::text::parse_grid;
    use islandcover::spatial::grid::{Block, BlockSource, flatten_blocks};
    use islandcover::spatial::index::GridIndex;
    use std::collections::{HashSet, VecDeque};

    fn catalog_for(text: &str, config: IslandConfig) -> (GridIndex, Vec<Block>, ShapeCatalog) {
        let grid = parse_grid(text).expect("test grid should parse");
        let (rows, cols) = grid.extent();
        let index = GridIndex::new(rows, cols);
        let blocks = flatten_blocks(&grid, &index);
        let catalog = enumerate_shapes(index, &blocks, config);
        (index, blocks, catalog)
    }

    fn is_connected(index: &GridIndex, shape: &Shape) -> bool {
        let Some(&start) = shape.cells.first() else {
            return false;
        };
        let mut reached = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            for next in index.neighbors(cell) {
                if shape.cell_mask.contains(next) && reached.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        reached.len() == shape.cells.len()
    }

    // Every shape is sized, sorted, connected, tethered and carries consistent masks
    // Verified by emitting sized sets without a tether
    #[test]
    fn test_shapes_are_well_formed() {
        let config = IslandConfig::default();
        let (index, _, catalog) = catalog_for(".....\n.....\n..T..\n.....\n.....\n", config);

        assert!(!catalog.shapes.is_empty());
        for shape in &catalog.shapes {
            assert!((config.min_island_size..=config.max_island_size).contains(&shape.size()));
            assert!(shape.cells.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(is_connected(&index, shape), "shape {:?} is not connected", shape.cells);
            assert_eq!(shape.cell_mask.to_vec(), shape.cells);
            assert!(!shape.neighbor_mask.intersects(&shape.cell_mask));
            assert!(shape.tether.stem.iter().all(|cell| shape.cell_mask.contains(*cell)));
            assert!(shape.cell_mask.contains(shape.tether.stopper));
            assert_eq!(shape.targets, vec![12]);
        }
    }

    // Generation for a target stops at the configured cap
    // Verified by registering under full targets
    #[test]
    fn test_shape_cap_per_target() {
        let grid = ".....\n.....\n..T..\n.....\n.....\n";

        let (_, _, catalog) = catalog_for(grid, IslandConfig::default());
        assert_eq!(catalog.candidates_for(12).len(), 24);
        assert_eq!(catalog.shapes.len(), 24);

        let capped = IslandConfig {
            max_shapes_per_target: 3,
            ..IslandConfig::default()
        };
        let (_, _, catalog) = catalog_for(grid, capped);
        assert_eq!(catalog.candidates_for(12).len(), 3);
    }

    // Breadth-first order plus a stable sort puts the smallest shapes first
    // Verified by sorting candidates with an unstable sort
    #[test]
    fn test_smallest_shapes_ranked_first_on_ties() {
        let (_, _, catalog) =
            catalog_for(".....\n.....\n..T..\n.....\n.....\n", IslandConfig::default());

        let sizes: Vec<usize> = catalog
            .candidates_for(12)
            .iter()
            .filter_map(|&id| catalog.shape(id))
            .map(Shape::size)
            .collect();
        assert_eq!(sizes.first(), Some(&4));
        assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    // Shared shapes are created once and listed under every target they contain
    // Verified by registering each shape under its seed target only
    #[test]
    fn test_shapes_deduplicated_and_registered_under_all_targets() {
        let config = IslandConfig {
            max_shapes_per_target: 10_000,
            ..IslandConfig::default()
        };
        let (_, _, catalog) = catalog_for("....\n.TT.\n....\n", config);

        let distinct: HashSet<&Vec<usize>> =
            catalog.shapes.iter().map(|shape| &shape.cells).collect();
        assert_eq!(distinct.len(), catalog.shapes.len());

        for (id, shape) in catalog.shapes.iter().enumerate() {
            for target in &shape.targets {
                let listed = catalog.candidates_for(*target);
                assert_eq!(
                    listed.iter().filter(|&&other| other == id).count(),
                    1,
                    "shape {id} should be listed once under target {target}"
                );
            }
        }

        assert!(
            catalog.shapes.iter().any(|shape| shape.targets_covered() == 2),
            "some shape should cover both adjacent targets"
        );
    }

    // Candidate lists are ordered by descending coverage
    // Verified by sorting in ascending coverage order
    #[test]
    fn test_candidates_sorted_by_coverage() {
        let (_, _, catalog) = catalog_for("....\n.TT.\n..T.\n", IslandConfig::default());

        for (&target, ids) in &catalog.candidates {
            let covered: Vec<usize> = ids
                .iter()
                .filter_map(|&id| catalog.shape(id))
                .map(Shape::targets_covered)
                .collect();
            assert!(
                covered.windows(2).all(|pair| pair[0] >= pair[1]),
                "candidates of {target} out of order: {covered:?}"
            );
            assert!(covered.first().is_some_and(|&c| c >= 2));
        }
    }

    // Obstacle cells are never part of a shape
    // Verified by treating obstacles as open during expansion
    #[test]
    fn test_obstacles_excluded() {
        let (_, blocks, catalog) = catalog_for("#.#.\n.T..\n#..#\n", IslandConfig::default());

        assert!(!catalog.shapes.is_empty());
        for shape in &catalog.shapes {
            for &cell in &shape.cells {
                assert_ne!(blocks.get(cell), Some(&Block::Obstacle));
            }
        }
    }

    // Enclosed targets keep an empty candidate list rather than no entry
    // Verified by creating candidate lists only on first registration
    #[test]
    fn test_enclosed_target_has_no_candidates() {
        let (_, _, catalog) = catalog_for("###\n#T#\n###\n", IslandConfig::default());
        assert!(catalog.shapes.is_empty());
        assert!(catalog.candidates.contains_key(&4));
        assert!(catalog.candidates_for(4).is_empty());
    }

    #[test]
    fn test_no_targets_no_shapes() {
        let (_, _, catalog) = catalog_for("....\n....\n", IslandConfig::default());
        assert!(catalog.shapes.is_empty());
        assert!(catalog.candidates.is_empty());
        assert_eq!(catalog.sets_explored, 0);
    }
}
