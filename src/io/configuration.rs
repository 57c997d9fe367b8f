//! Solver constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use std::time::Duration;

// A tether needs a three-cell stem plus a stopper, so no island can be smaller than this
/// Smallest island that can carry an embedded tether
pub const MIN_TETHER_CELLS: usize = 4;

/// Default lower bound on island size (inclusive)
pub const MIN_ISLAND_SIZE: usize = 4;
/// Default upper bound on island size (inclusive)
pub const MAX_ISLAND_SIZE: usize = 6;

// Bounds both shape-catalog memory and the branching factor of the search
/// Maximum number of candidate shapes registered per target cell
pub const MAX_SHAPES_PER_TARGET: usize = 24;

/// Default wall-clock budget for one search, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Score deducted for each placed island
pub const UNIT_ISLAND_COST: f64 = 0.25;

// Output settings
/// Suffix added to result filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Generated grids
/// Fixed seed for reproducible grid generation
pub const DEFAULT_SEED: u64 = 42;
/// Share of generated cells that are targets
pub const GENERATED_TARGET_RATIO: f64 = 0.08;
/// Share of generated cells that are obstacles
pub const GENERATED_OBSTACLE_RATIO: f64 = 0.15;

/// Parameters bounding shape generation and the search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IslandConfig {
    /// Smallest island size considered (inclusive)
    pub min_island_size: usize,
    /// Largest island size considered (inclusive)
    pub max_island_size: usize,
    /// Hard cap on candidate shapes per target
    pub max_shapes_per_target: usize,
    /// Wall-clock budget for the backtracking phase
    pub timeout: Duration,
    /// Score deducted per placed island
    pub unit_island_cost: f64,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            min_island_size: MIN_ISLAND_SIZE,
            max_island_size: MAX_ISLAND_SIZE,
            max_shapes_per_target: MAX_SHAPES_PER_TARGET,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            unit_island_cost: UNIT_ISLAND_COST,
        }
    }
}

impl IslandConfig {
    /// Replace the timeout, keeping every other parameter
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the parameters describe a searchable configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size range is empty or cannot hold a tether,
    /// if the shape cap is zero, or if the island cost is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.min_island_size < MIN_TETHER_CELLS {
            return Err(invalid_parameter(
                "min_island_size",
                &self.min_island_size,
                &format!("must be at least {MIN_TETHER_CELLS} to hold a tether"),
            ));
        }
        if self.max_island_size < self.min_island_size {
            return Err(invalid_parameter(
                "max_island_size",
                &self.max_island_size,
                &format!("must not be below min_island_size ({})", self.min_island_size),
            ));
        }
        if self.max_shapes_per_target == 0 {
            return Err(invalid_parameter(
                "max_shapes_per_target",
                &self.max_shapes_per_target,
                &"must be positive",
            ));
        }
        if !self.unit_island_cost.is_finite() || self.unit_island_cost < 0.0 {
            return Err(invalid_parameter(
                "unit_island_cost",
                &self.unit_island_cost,
                &"must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}
