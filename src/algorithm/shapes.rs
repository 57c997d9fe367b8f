//! Candidate island generation by bounded breadth-first growth from each target
//!
//! Every cell set reachable from a target by adding one 4-adjacent, non-obstacle cell at a
//! time is visited in breadth-first order up to the maximum island size. Sets within the
//! size range that carry a tether become shapes. Shapes are deduplicated across targets
//! and registered under every target they contain, and each target's list is capped.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::algorithm::bitset::CellBitset;
use crate::algorithm::tether::{Tether, detect_tether};
use crate::io::configuration::IslandConfig;
use crate::spatial::grid::Block;
use crate::spatial::index::GridIndex;

/// Immutable candidate island
#[derive(Clone, Debug)]
pub struct Shape {
    /// Member cells in ascending index order
    pub cells: Vec<usize>,
    /// Member cells as a mask
    pub cell_mask: CellBitset,
    /// Non-member cells adjacent to any member
    pub neighbor_mask: CellBitset,
    /// Target cells among the members, ascending
    pub targets: Vec<usize>,
    /// Embedded support structure
    pub tether: Tether,
}

impl Shape {
    /// Build a shape from sorted member cells and their tether
    ///
    /// `blocks` is the row-major classification used to find covered targets.
    pub fn new(index: &GridIndex, blocks: &[Block], cells: Vec<usize>, tether: Tether) -> Self {
        let cell_count = index.cell_count();
        let cell_mask = CellBitset::from_cells(cell_count, cells.iter().copied());

        let mut neighbor_mask = CellBitset::new(cell_count);
        for &cell in &cells {
            for neighbor in index.neighbors(cell) {
                if !cell_mask.contains(neighbor) {
                    neighbor_mask.insert(neighbor);
                }
            }
        }

        let targets = cells
            .iter()
            .copied()
            .filter(|&cell| blocks.get(cell) == Some(&Block::Target))
            .collect();

        Self {
            cells,
            cell_mask,
            neighbor_mask,
            targets,
            tether,
        }
    }

    /// Number of target cells this shape covers
    pub fn targets_covered(&self) -> usize {
        self.targets.len()
    }

    /// Number of member cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

/// All shapes generated for one grid, with per-target candidate lists
#[derive(Clone, Debug, Default)]
pub struct ShapeCatalog {
    /// Every distinct shape, addressed by position
    pub shapes: Vec<Shape>,
    /// Target cell to candidate shape ids, best coverage first
    pub candidates: HashMap<usize, Vec<usize>>,
    /// Cell sets visited across all targets
    pub sets_explored: usize,
}

impl ShapeCatalog {
    /// Candidate shape ids for a target, empty if it has none
    pub fn candidates_for(&self, target: usize) -> &[usize] {
        self.candidates.get(&target).map_or(&[], Vec::as_slice)
    }

    /// Look up a shape by id
    pub fn shape(&self, id: usize) -> Option<&Shape> {
        self.shapes.get(id)
    }
}

/// Builds a [`ShapeCatalog`] for one grid
pub struct ShapeEnumerator<'a> {
    index: GridIndex,
    blocks: &'a [Block],
    config: IslandConfig,
    catalog: ShapeCatalog,
    /// Sized cell sets already turned into a shape or rejected for lacking a tether
    known: HashSet<Vec<usize>>,
}

impl<'a> ShapeEnumerator<'a> {
    /// Create an enumerator over row-major `blocks` described by `index`
    pub fn new(index: GridIndex, blocks: &'a [Block], config: IslandConfig) -> Self {
        Self {
            index,
            blocks,
            config,
            catalog: ShapeCatalog::default(),
            known: HashSet::new(),
        }
    }

    /// Enumerate shapes for every target and return the ranked catalog
    pub fn enumerate(mut self) -> ShapeCatalog {
        let targets: Vec<usize> = self
            .blocks
            .iter()
            .enumerate()
            .filter(|&(_, &block)| block == Block::Target)
            .map(|(cell, _)| cell)
            .collect();

        for &target in &targets {
            self.catalog.candidates.entry(target).or_default();
        }
        for &target in &targets {
            self.grow_from(target);
        }

        let shapes = &self.catalog.shapes;
        for ids in self.catalog.candidates.values_mut() {
            ids.sort_by_key(|&id| Reverse(shapes.get(id).map_or(0, Shape::targets_covered)));
        }

        log::debug!(
            "enumerated {} shapes for {} targets ({} cell sets explored)",
            self.catalog.shapes.len(),
            targets.len(),
            self.catalog.sets_explored
        );

        self.catalog
    }

    fn is_target(&self, cell: usize) -> bool {
        self.blocks.get(cell) == Some(&Block::Target)
    }

    fn is_open(&self, cell: usize) -> bool {
        matches!(self.blocks.get(cell), Some(Block::Empty | Block::Target))
    }

    fn target_is_full(&self, target: usize) -> bool {
        self.catalog
            .candidates
            .get(&target)
            .is_none_or(|ids| ids.len() >= self.config.max_shapes_per_target)
    }

    /// Breadth-first growth from a single target cell
    fn grow_from(&mut self, target: usize) {
        let min_size = self.config.min_island_size;
        let max_size = self.config.max_island_size;

        let mut queue = VecDeque::from([vec![target]]);
        let mut seen: HashSet<Vec<usize>> = HashSet::from([vec![target]]);

        while !self.target_is_full(target) {
            let Some(cells) = queue.pop_front() else {
                break;
            };
            self.catalog.sets_explored += 1;

            if (min_size..=max_size).contains(&cells.len()) {
                self.consider(&cells);
            }

            if cells.len() >= max_size {
                continue;
            }

            for extension in self.expansion_order(&cells) {
                let mut grown = cells.clone();
                let position = grown.partition_point(|&cell| cell < extension);
                grown.insert(position, extension);
                if seen.insert(grown.clone()) {
                    queue.push_back(grown);
                }
            }
        }
    }

    /// Open cells adjacent to `cells`, targets first, then ascending index
    fn expansion_order(&self, cells: &[usize]) -> Vec<usize> {
        let mut frontier: Vec<usize> = cells
            .iter()
            .flat_map(|&cell| self.index.neighbors(cell))
            .filter(|&cell| self.is_open(cell) && cells.binary_search(&cell).is_err())
            .collect();
        frontier.sort_unstable_by_key(|&cell| (!self.is_target(cell), cell));
        frontier.dedup();
        frontier
    }

    /// Turn a sized cell set into a shape if it is new and carries a tether
    fn consider(&mut self, cells: &[usize]) {
        if !self.known.insert(cells.to_vec()) {
            return;
        }

        let Some(tether) = detect_tether(&self.index, cells) else {
            return;
        };

        let id = self.catalog.shapes.len();
        let shape = Shape::new(&self.index, self.blocks, cells.to_vec(), tether);

        for &covered in &shape.targets {
            if !self.target_is_full(covered) {
                self.catalog.candidates.entry(covered).or_default().push(id);
            }
        }

        self.catalog.shapes.push(shape);
    }
}

/// Enumerate candidate shapes for every target cell of a flattened grid
pub fn enumerate_shapes(index: GridIndex, blocks: &[Block], config: IslandConfig) -> ShapeCatalog {
    ShapeEnumerator::new(index, blocks, config).enumerate()
}
