//! Detection of an embedded tether: a straight three-cell stem with a perpendicular stopper
//!
//! Members and directions are visited in ascending index and canonical direction order,
//! so the same cell set always yields the same tether.

use crate::algorithm::bitset::CellBitset;
use crate::spatial::index::{DIRECTIONS, GridIndex};

/// Support structure embedded in an island
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tether {
    /// Stem cells in order along the axis: preceding end, center, following end
    pub stem: [usize; 3],
    /// Member cell perpendicular to one stem end
    pub stopper: usize,
    /// Stem cells only
    pub stem_mask: CellBitset,
    /// Stem cells plus every in-bounds cell adjacent to the stem
    ///
    /// Built from the stem alone; the stopper's own neighbors are not included.
    pub stem_neighbor_mask: CellBitset,
}

impl Tether {
    fn new(index: &GridIndex, stem: [usize; 3], stopper: usize) -> Self {
        let cell_count = index.cell_count();
        let stem_mask = CellBitset::from_cells(cell_count, stem);
        let stem_neighbor_mask = CellBitset::from_cells(
            cell_count,
            stem.iter()
                .flat_map(|&cell| std::iter::once(cell).chain(index.neighbors(cell))),
        );
        Self {
            stem,
            stopper,
            stem_mask,
            stem_neighbor_mask,
        }
    }
}

/// Directions perpendicular to `direction`, in canonical order
fn perpendicular(direction: [i32; 2]) -> impl Iterator<Item = [i32; 2]> {
    DIRECTIONS
        .into_iter()
        .filter(move |d| d[0] * direction[0] + d[1] * direction[1] == 0)
}

/// Find the first tether embedded in `cells`
///
/// `cells` must be sorted ascending; membership tests use binary search.
pub fn detect_tether(index: &GridIndex, cells: &[usize]) -> Option<Tether> {
    let is_member = |cell: usize| cells.binary_search(&cell).is_ok();

    for &center in cells {
        for direction in DIRECTIONS {
            let backward = [-direction[0], -direction[1]];
            let Some(before) = index.step(center, backward).filter(|&c| is_member(c)) else {
                continue;
            };
            let Some(after) = index.step(center, direction).filter(|&c| is_member(c)) else {
                continue;
            };

            for end in [before, after] {
                for side in perpendicular(direction) {
                    if let Some(stopper) = index.step(end, side).filter(|&c| is_member(c)) {
                        return Some(Tether::new(index, [before, center, after], stopper));
                    }
                }
            }
        }
    }

    None
}
