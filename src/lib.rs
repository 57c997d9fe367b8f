//! Branch-and-bound placement of tethered islands over target cells on a 2D grid
//!
//! Candidate islands are grown from every target cell by bounded breadth-first expansion,
//! filtered to those carrying an embedded tether, and then combined by a time-boxed
//! backtracking search that maximises covered targets minus a fixed per-island cost.

#![forbid(unsafe_code)]

/// Shape enumeration, tether detection, scoring and the backtracking search
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid indexing and block classification
pub mod spatial;

pub use algorithm::search::solve;
pub use algorithm::solution::{Material, PlacedGroup, Solution};
pub use io::error::{IslandError, Result};
pub use spatial::grid::{Block, BlockGrid, BlockSource};
