//! Tests for block grids, the block source contract and random generation

#[cfg(test)]
mod tests {
    use islandcover::spatial::grid::{Block, BlockGrid, BlockSource, flatten_blocks};
    use islandcover::spatial::index::GridIndex;

    // New grids start fully empty
    #[test]
    fn test_new_grid_is_empty() {
        let grid = BlockGrid::new(2, 3);
        assert_eq!(grid.extent(), (2, 3));
        assert_eq!(grid.target_count(), 0);
        assert_eq!(grid.block([1, 2]), Block::Empty);
    }

    // Coordinates outside the extent read as obstacles
    // Verified by returning empty for negative coordinates
    #[test]
    fn test_out_of_bounds_reads_as_obstacle() {
        let grid = BlockGrid::new(2, 2);
        assert_eq!(grid.block([-1, 0]), Block::Obstacle);
        assert_eq!(grid.block([0, 2]), Block::Obstacle);
        assert_eq!(grid.block([2, 0]), Block::Obstacle);
    }

    // Writes outside the extent are ignored
    // Verified by clamping coordinates into the grid
    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut grid = BlockGrid::new(2, 2);
        grid.set([0, 1], Block::Target);
        grid.set([5, 5], Block::Target);
        grid.set([-1, 0], Block::Target);

        assert_eq!(grid.block([0, 1]), Block::Target);
        assert_eq!(grid.target_count(), 1);
    }

    // Same seed reproduces the same grid, a different seed does not
    // Verified by seeding from entropy
    #[test]
    fn test_random_is_seeded() {
        let a = BlockGrid::random(12, 12, 0.2, 0.2, 7);
        let b = BlockGrid::random(12, 12, 0.2, 0.2, 7);
        let c = BlockGrid::random(12, 12, 0.2, 0.2, 8);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    // Ratios of one and zero produce uniform grids
    #[test]
    fn test_random_ratio_extremes() {
        let all_targets = BlockGrid::random(4, 5, 1.0, 0.0, 1);
        assert_eq!(all_targets.target_count(), 20);

        let all_obstacles = BlockGrid::random(4, 5, 0.0, 1.0, 1);
        assert!(all_obstacles.blocks().iter().all(|&b| b == Block::Obstacle));

        let all_empty = BlockGrid::random(4, 5, 0.0, 0.0, 1);
        assert!(all_empty.blocks().iter().all(|&b| b == Block::Empty));
    }

    // Flattening follows row-major index order
    // Verified by flattening in column-major order
    #[test]
    fn test_flatten_blocks_row_major() {
        let mut grid = BlockGrid::new(2, 3);
        grid.set([0, 2], Block::Target);
        grid.set([1, 0], Block::Obstacle);

        let index = GridIndex::new(2, 3);
        let flat = flatten_blocks(&grid, &index);
        assert_eq!(
            flat,
            vec![
                Block::Empty,
                Block::Empty,
                Block::Target,
                Block::Obstacle,
                Block::Empty,
                Block::Empty,
            ]
        );
    }
}
