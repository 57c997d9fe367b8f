use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over the flat cell indices of one grid
///
/// Every mask taking part in a search is created with the same cell count, so the
/// word-wise operations below never need to reconcile lengths.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellBitset {
    bits: BitVec,
}

impl CellBitset {
    /// Create a bitset with no cells present
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
        }
    }

    /// Create a bitset containing the given cells
    ///
    /// Cells outside `0..cell_count` are ignored.
    pub fn from_cells(cell_count: usize, cells: impl IntoIterator<Item = usize>) -> Self {
        let mut bitset = Self::new(cell_count);
        for cell in cells {
            bitset.insert(cell);
        }
        bitset
    }

    /// Number of cells the bitset can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a cell index
    pub fn insert(&mut self, cell: usize) {
        if cell < self.bits.len() {
            self.bits.set(cell, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: usize) -> bool {
        self.bits.get(cell).as_deref() == Some(&true)
    }

    /// Test whether any cell is present in both sets
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits
            .as_raw_slice()
            .iter()
            .zip(other.bits.as_raw_slice())
            .any(|(a, b)| a & b != 0)
    }

    /// Add every cell of `other` in-place
    pub fn union_with(&mut self, other: &Self) {
        for (a, b) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *a |= *b;
        }
    }

    /// Remove every cell of `other` in-place
    ///
    /// Reverts a prior [`CellBitset::union_with`] exactly when the two sets were disjoint
    /// before the union.
    pub fn subtract(&mut self, other: &Self) {
        for (a, b) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *a &= !*b;
        }
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate present cells in ascending index order
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all cell indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CellBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellBitset({} cells: {:?})", self.count(), self.to_vec())
    }
}
