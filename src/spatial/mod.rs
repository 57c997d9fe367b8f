//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Flat cell indexing over a rectangular extent
//! - Block classification grids and the source trait the solver consumes

/// Block classification grids and random instance generation
pub mod grid;
/// Coordinate to flat-index bijection and neighborhood iteration
pub mod index;

pub use grid::{Block, BlockGrid, BlockSource};
pub use index::GridIndex;
