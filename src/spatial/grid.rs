//! Block classification grids consumed by the solver
//!
//! The solver only sees a grid through [`BlockSource`]: a rectangular extent plus a
//! classification per coordinate. [`BlockGrid`] is the in-memory implementation used by
//! the text and PNG loaders and by the random instance generator.

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::index::GridIndex;

/// Classification of a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Block {
    /// Free cell that islands may occupy
    #[default]
    Empty,
    /// Cell that should be covered by some island
    Target,
    /// Cell no island may occupy
    Obstacle,
}

/// Rectangular source of block classifications
pub trait BlockSource {
    /// Extent as `(rows, cols)`
    fn extent(&self) -> (usize, usize);

    /// Classification at a `[row, col]` coordinate
    ///
    /// Coordinates outside the extent are reported as [`Block::Obstacle`].
    fn block(&self, coord: [i32; 2]) -> Block;
}

/// Dense grid of block classifications
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockGrid {
    blocks: Array2<Block>,
}

impl BlockGrid {
    /// Create a grid with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            blocks: Array2::from_elem((rows, cols), Block::Empty),
        }
    }

    /// Wrap an existing block array
    pub const fn from_array(blocks: Array2<Block>) -> Self {
        Self { blocks }
    }

    /// Generate a seeded random grid
    ///
    /// Each cell independently becomes a target with probability `target_ratio`,
    /// otherwise an obstacle with probability `obstacle_ratio`, otherwise empty.
    pub fn random(
        rows: usize,
        cols: usize,
        target_ratio: f64,
        obstacle_ratio: f64,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let blocks = Array2::from_shape_simple_fn((rows, cols), || {
            let roll = rng.random::<f64>();
            if roll < target_ratio {
                Block::Target
            } else if roll < target_ratio + obstacle_ratio {
                Block::Obstacle
            } else {
                Block::Empty
            }
        });
        Self { blocks }
    }

    /// Underlying block array indexed by `[row, col]`
    pub const fn blocks(&self) -> &Array2<Block> {
        &self.blocks
    }

    /// Set the block at a coordinate, ignoring coordinates outside the grid
    pub fn set(&mut self, coord: [i32; 2], block: Block) {
        if coord[0] < 0 || coord[1] < 0 {
            return;
        }
        if let Some(cell) = self
            .blocks
            .get_mut([coord[0] as usize, coord[1] as usize])
        {
            *cell = block;
        }
    }

    /// Number of target cells in the grid
    pub fn target_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|&&block| block == Block::Target)
            .count()
    }
}

impl BlockSource for BlockGrid {
    fn extent(&self) -> (usize, usize) {
        self.blocks.dim()
    }

    fn block(&self, coord: [i32; 2]) -> Block {
        if coord[0] < 0 || coord[1] < 0 {
            return Block::Obstacle;
        }
        self.blocks
            .get([coord[0] as usize, coord[1] as usize])
            .copied()
            .unwrap_or(Block::Obstacle)
    }
}

/// Flattened classification of every cell of a source, in row-major order
pub fn flatten_blocks(source: &impl BlockSource, index: &GridIndex) -> Vec<Block> {
    (0..index.cell_count())
        .map(|cell| source.block(index.to_vec(cell)))
        .collect()
}
