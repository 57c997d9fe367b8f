//! Bijection between `[row, col]` coordinates and flat cell indices
//!
//! Flat indices are row-major, so ascending index order is the canonical
//! iteration order used wherever results must be reproducible.

/// Axis offsets in canonical order: up, right, down, left
pub const DIRECTIONS: [[i32; 2]; 4] = [[-1, 0], [0, 1], [1, 0], [0, -1]];

/// Row-major indexing over a rectangular `rows x cols` extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridIndex {
    rows: usize,
    cols: usize,
}

impl GridIndex {
    /// Create an index for the given extent
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of rows in the extent
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the extent
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Test whether a coordinate lies inside the extent
    pub const fn in_bounds(&self, coord: [i32; 2]) -> bool {
        coord[0] >= 0
            && coord[1] >= 0
            && (coord[0] as usize) < self.rows
            && (coord[1] as usize) < self.cols
    }

    /// Flat index of a coordinate, or `None` outside the extent
    pub const fn to_flat(&self, coord: [i32; 2]) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord[0] as usize * self.cols + coord[1] as usize)
        } else {
            None
        }
    }

    /// Coordinate of a flat index
    ///
    /// Inverse of [`GridIndex::to_flat`] for every index below [`GridIndex::cell_count`].
    pub const fn to_vec(&self, index: usize) -> [i32; 2] {
        if self.cols == 0 {
            return [0, 0];
        }
        [(index / self.cols) as i32, (index % self.cols) as i32]
    }

    /// Flat index one step from `index` along `direction`, if still in bounds
    pub const fn step(&self, index: usize, direction: [i32; 2]) -> Option<usize> {
        let coord = self.to_vec(index);
        self.to_flat([coord[0] + direction[0], coord[1] + direction[1]])
    }

    /// In-bounds 4-neighbors of a cell in canonical direction order
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&direction| self.step(index, direction))
    }
}
