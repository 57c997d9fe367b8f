//! Output container for the islands chosen by a search

use std::fmt;
use std::time::Duration;

/// Placement category of an island; islands of different materials never bond
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Material {
    /// Default material for islands with no placed neighbors
    #[default]
    Slime,
    /// Alternate material
    Honey,
}

impl Material {
    /// The other material
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Slime => Self::Honey,
            Self::Honey => Self::Slime,
        }
    }

    /// Single-character tag used in text renderings
    pub const fn symbol(self) -> char {
        match self {
            Self::Slime => 'S',
            Self::Honey => 'H',
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slime => write!(f, "slime"),
            Self::Honey => write!(f, "honey"),
        }
    }
}

/// One placed island in grid coordinates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedGroup {
    /// Member coordinates in row-major order
    pub cells: Vec<[i32; 2]>,
    /// Assigned material
    pub material: Material,
    /// Tether stem coordinates along the stem axis
    pub stem: [[i32; 2]; 3],
    /// Tether stopper coordinate
    pub stopper: [i32; 2],
}

/// Counters describing how a search went
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// Distinct candidate shapes generated
    pub shapes_generated: usize,
    /// Recursive search calls made
    pub nodes_visited: usize,
    /// Branches cut by the optimistic bound
    pub pruned: usize,
    /// Whether the time budget expired before the search was exhausted
    pub timed_out: bool,
    /// Wall-clock time spent in the backtracking phase
    pub elapsed: Duration,
}

/// Best assignment found by a search
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Placed islands in placement order
    pub groups: Vec<PlacedGroup>,
    /// Score of the assignment
    pub score: f64,
    /// Target cells covered by the groups
    pub covered_targets: usize,
    /// Target cells in the grid
    pub total_targets: usize,
    /// Search counters
    pub stats: SearchStats,
}

impl Solution {
    /// Solution placing nothing, the baseline every search starts from
    pub fn empty(total_targets: usize) -> Self {
        Self {
            total_targets,
            ..Self::default()
        }
    }

    /// Share of targets covered, `1.0` when there are none
    pub fn coverage(&self) -> f64 {
        if self.total_targets == 0 {
            1.0
        } else {
            self.covered_targets as f64 / self.total_targets as f64
        }
    }
}
