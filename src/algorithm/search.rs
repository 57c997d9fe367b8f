//! Time-boxed branch-and-bound search over candidate shapes
//!
//! Targets are visited most-constrained first. At each target the search either places
//! one of its candidate shapes or leaves the target uncovered, keeping two material
//! occupancy masks and a stem-exclusion mask that are applied before and reverted after
//! every recursive call. The deadline is polled at the top of each call, so the search
//! is anytime: whatever the best snapshot is when time runs out is the answer.

use std::collections::HashMap;
use std::time::Instant;

use crate::algorithm::bitset::CellBitset;
use crate::algorithm::scoring::{optimistic_bound, score};
use crate::algorithm::shapes::{Shape, ShapeCatalog, enumerate_shapes};
use crate::algorithm::solution::{Material, PlacedGroup, SearchStats, Solution};
use crate::io::configuration::IslandConfig;
use crate::io::error::Result;
use crate::spatial::grid::{Block, BlockSource, flatten_blocks};
use crate::spatial::index::GridIndex;

/// A shape chosen by the search together with its material
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedIsland {
    /// Shape id within the catalog
    pub shape: usize,
    /// Assigned material
    pub material: Material,
}

/// Mutable masks and placements of the branch currently being explored
#[derive(Clone, Debug)]
pub struct SearchState {
    slime: CellBitset,
    honey: CellBitset,
    stem_exclusion: CellBitset,
    placed: Vec<PlacedIsland>,
}

impl SearchState {
    /// Create an empty state for a grid of `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        Self {
            slime: CellBitset::new(cell_count),
            honey: CellBitset::new(cell_count),
            stem_exclusion: CellBitset::new(cell_count),
            placed: Vec::new(),
        }
    }

    /// Cells occupied by islands of one material
    pub const fn occupancy(&self, material: Material) -> &CellBitset {
        match material {
            Material::Slime => &self.slime,
            Material::Honey => &self.honey,
        }
    }

    const fn occupancy_mut(&mut self, material: Material) -> &mut CellBitset {
        match material {
            Material::Slime => &mut self.slime,
            Material::Honey => &mut self.honey,
        }
    }

    /// Union of the stem-neighbor masks of all placed islands
    pub const fn stem_exclusion(&self) -> &CellBitset {
        &self.stem_exclusion
    }

    /// Islands placed on the current branch, in placement order
    pub fn placed(&self) -> &[PlacedIsland] {
        &self.placed
    }

    /// Test whether a cell belongs to any placed island
    pub fn is_covered(&self, cell: usize) -> bool {
        self.slime.contains(cell) || self.honey.contains(cell)
    }

    /// Material a shape would receive, or `None` if it cannot be placed
    ///
    /// A shape is rejected when it overlaps a placed island, when its stem neighborhood
    /// meets another stem neighborhood, or when it borders both materials. Otherwise it
    /// takes the material opposite to the one it borders, or the default if it borders none.
    pub fn admit(&self, shape: &Shape) -> Option<Material> {
        if shape.cell_mask.intersects(&self.slime) || shape.cell_mask.intersects(&self.honey) {
            return None;
        }
        if shape
            .tether
            .stem_neighbor_mask
            .intersects(&self.stem_exclusion)
        {
            return None;
        }

        let touches_slime = shape.neighbor_mask.intersects(&self.slime);
        let touches_honey = shape.neighbor_mask.intersects(&self.honey);
        match (touches_slime, touches_honey) {
            (true, true) => None,
            (true, false) => Some(Material::Slime.opposite()),
            (false, true) => Some(Material::Honey.opposite()),
            (false, false) => Some(Material::default()),
        }
    }

    /// Apply a placement previously approved by [`SearchState::admit`]
    pub fn place(&mut self, id: usize, shape: &Shape, material: Material) {
        self.occupancy_mut(material).union_with(&shape.cell_mask);
        self.stem_exclusion
            .union_with(&shape.tether.stem_neighbor_mask);
        self.placed.push(PlacedIsland {
            shape: id,
            material,
        });
    }

    /// Revert the most recent [`SearchState::place`]
    ///
    /// Exact because an admitted shape is disjoint from every mask it was merged into.
    pub fn remove(&mut self, shape: &Shape, material: Material) {
        let _ = self.placed.pop();
        self.stem_exclusion
            .subtract(&shape.tether.stem_neighbor_mask);
        self.occupancy_mut(material).subtract(&shape.cell_mask);
    }
}

/// Best assignment found by a [`SearchEngine`] run
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    /// Chosen islands in placement order
    pub islands: Vec<PlacedIsland>,
    /// Score of the chosen islands
    pub score: f64,
    /// Targets covered by the chosen islands
    pub covered: usize,
    /// Search counters
    pub stats: SearchStats,
}

/// Recursive backtracking search over a shape catalog
pub struct SearchEngine<'a> {
    catalog: &'a ShapeCatalog,
    config: IslandConfig,
    order: Vec<usize>,
    rank: HashMap<usize, usize>,
    /// Per position: whether a later target has a candidate containing this target
    coverable_later: Vec<bool>,
    state: SearchState,
    started: Instant,
    best_score: f64,
    best_covered: usize,
    best: Vec<PlacedIsland>,
    stats: SearchStats,
}

impl<'a> SearchEngine<'a> {
    /// Prepare a search over every target listed in the catalog
    pub fn new(catalog: &'a ShapeCatalog, cell_count: usize, config: IslandConfig) -> Self {
        let order = most_constrained_order(catalog);
        let rank = order
            .iter()
            .enumerate()
            .map(|(position, &target)| (target, position))
            .collect();
        let coverable_later = coverable_later(catalog, &order);

        Self {
            catalog,
            config,
            order,
            rank,
            coverable_later,
            state: SearchState::new(cell_count),
            started: Instant::now(),
            best_score: 0.0,
            best_covered: 0,
            best: Vec::new(),
            stats: SearchStats {
                shapes_generated: catalog.shapes.len(),
                ..SearchStats::default()
            },
        }
    }

    /// Targets in the order the search visits them
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Run until the tree is exhausted or the timeout expires
    pub fn run(mut self) -> SearchOutcome {
        self.started = Instant::now();
        self.descend(0, 0, self.order.len());
        self.stats.elapsed = self.started.elapsed();

        SearchOutcome {
            islands: self.best,
            score: self.best_score,
            covered: self.best_covered,
            stats: self.stats,
        }
    }

    fn descend(&mut self, position: usize, covered: usize, remaining: usize) {
        self.stats.nodes_visited += 1;
        if self.started.elapsed() >= self.config.timeout {
            self.stats.timed_out = true;
            return;
        }

        let current = score(covered, self.state.placed.len(), self.config.unit_island_cost);

        let Some(&target) = self.order.get(position) else {
            if current > self.best_score {
                self.best_score = current;
                self.best_covered = covered;
                self.best.clone_from(&self.state.placed);
            }
            return;
        };

        if optimistic_bound(current, remaining) <= self.best_score {
            self.stats.pruned += 1;
            return;
        }

        if self.state.is_covered(target) {
            self.descend(position + 1, covered, remaining);
            return;
        }

        let catalog = self.catalog;
        for &id in catalog.candidates_for(target) {
            let Some(shape) = catalog.shape(id) else {
                continue;
            };
            let Some(material) = self.state.admit(shape) else {
                continue;
            };

            let claimed = self.unprocessed_targets(shape, position);
            self.state.place(id, shape, material);
            self.descend(
                position + 1,
                covered + shape.targets_covered(),
                remaining.saturating_sub(claimed),
            );
            self.state.remove(shape, material);

            if self.stats.timed_out {
                return;
            }
        }

        // A target passed over here may still be covered from a later target
        let settled = usize::from(self.coverable_later.get(position) != Some(&true));
        self.descend(position + 1, covered, remaining.saturating_sub(settled));
    }

    /// Targets of `shape` visited at or after `position`
    fn unprocessed_targets(&self, shape: &Shape, position: usize) -> usize {
        shape
            .targets
            .iter()
            .filter(|target| self.rank.get(target).is_some_and(|&rank| rank >= position))
            .count()
    }
}

/// For each position in `order`, whether a candidate of some later target contains it
fn coverable_later(catalog: &ShapeCatalog, order: &[usize]) -> Vec<bool> {
    order
        .iter()
        .enumerate()
        .map(|(position, &target)| {
            order.iter().skip(position + 1).any(|&later| {
                catalog
                    .candidates_for(later)
                    .iter()
                    .filter_map(|&id| catalog.shape(id))
                    .any(|shape| shape.targets.binary_search(&target).is_ok())
            })
        })
        .collect()
}

/// Targets ordered by ascending candidate count, ties by cell index
pub fn most_constrained_order(catalog: &ShapeCatalog) -> Vec<usize> {
    let mut order: Vec<usize> = catalog.candidates.keys().copied().collect();
    order.sort_unstable();
    order.sort_by_key(|&target| catalog.candidates_for(target).len());
    order
}

/// Find the best non-conflicting set of tethered islands covering the grid's targets
///
/// Shapes are enumerated once, then searched until exhaustion or until
/// `config.timeout` elapses. The empty placement (score 0) is returned whenever
/// nothing scores strictly better.
///
/// # Errors
///
/// Returns `InvalidParameter` if `config` fails [`IslandConfig::validate`]
pub fn solve(source: &impl BlockSource, config: &IslandConfig) -> Result<Solution> {
    config.validate()?;

    let (rows, cols) = source.extent();
    let index = GridIndex::new(rows, cols);
    let blocks = flatten_blocks(source, &index);
    let total_targets = blocks.iter().filter(|&&b| b == Block::Target).count();

    if total_targets == 0 {
        return Ok(Solution::empty(0));
    }

    let catalog = enumerate_shapes(index, &blocks, *config);
    let outcome = SearchEngine::new(&catalog, index.cell_count(), *config).run();

    if outcome.stats.timed_out {
        log::warn!(
            "search curtailed after {:?} ({} nodes); returning best found",
            outcome.stats.elapsed,
            outcome.stats.nodes_visited
        );
    }
    log::info!(
        "placed {} islands covering {}/{} targets (score {:.2}, {} shapes, {} nodes, {} pruned)",
        outcome.islands.len(),
        outcome.covered,
        total_targets,
        outcome.score,
        outcome.stats.shapes_generated,
        outcome.stats.nodes_visited,
        outcome.stats.pruned
    );

    let groups = outcome
        .islands
        .iter()
        .filter_map(|island| {
            catalog
                .shape(island.shape)
                .map(|shape| placed_group(&index, shape, island.material))
        })
        .collect();

    Ok(Solution {
        groups,
        score: outcome.score,
        covered_targets: outcome.covered,
        total_targets,
        stats: outcome.stats,
    })
}

fn placed_group(index: &GridIndex, shape: &Shape, material: Material) -> PlacedGroup {
    let [before, center, after] = shape.tether.stem;
    PlacedGroup {
        cells: shape.cells.iter().map(|&cell| index.to_vec(cell)).collect(),
        material,
        stem: [
            index.to_vec(before),
            index.to_vec(center),
            index.to_vec(after),
        ],
        stopper: index.to_vec(shape.tether.stopper),
    }
}
