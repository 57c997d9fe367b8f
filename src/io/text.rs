//! Plain-text grid format
//!
//! One grid row per line: `.` empty, `T` target, `#` obstacle. Rendered solutions
//! replace island cells with their material symbol (`S` or `H`) and leave uncovered
//! targets as `T`.

use ndarray::Array2;
use std::path::Path;

use crate::algorithm::solution::Solution;
use crate::io::error::{Result, file_system_error, grid_parse_error};
use crate::spatial::grid::{Block, BlockGrid, BlockSource};

/// Character for a block in the text format
pub const fn block_symbol(block: Block) -> char {
    match block {
        Block::Empty => '.',
        Block::Target => 'T',
        Block::Obstacle => '#',
    }
}

fn parse_symbol(symbol: char) -> Option<Block> {
    match symbol {
        '.' => Some(Block::Empty),
        'T' => Some(Block::Target),
        '#' => Some(Block::Obstacle),
        _ => None,
    }
}

/// Parse a text grid
///
/// Trailing blank lines are ignored; every other line must have the width of the first.
///
/// # Errors
///
/// Returns `GridParse` for unknown characters or rows of differing width
pub fn parse_grid(input: &str) -> Result<BlockGrid> {
    let lines: Vec<&str> = input
        .trim_end_matches(['\n', '\r'])
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    let cols = lines.first().map_or(0, |line| line.chars().count());
    let mut blocks = Vec::with_capacity(lines.len() * cols);

    for (row, line) in lines.iter().enumerate() {
        let mut width = 0;
        for (col, symbol) in line.chars().enumerate() {
            let block = parse_symbol(symbol).ok_or_else(|| {
                grid_parse_error(row + 1, col + 1, &format!("unknown block symbol '{symbol}'"))
            })?;
            blocks.push(block);
            width += 1;
        }
        if width != cols {
            return Err(grid_parse_error(
                row + 1,
                width.min(cols) + 1,
                &format!("row has {width} cells, expected {cols}"),
            ));
        }
    }

    let array = Array2::from_shape_vec((lines.len(), cols), blocks)
        .map_err(|err| grid_parse_error(1, 1, &err))?;
    Ok(BlockGrid::from_array(array))
}

/// Load a text grid from disk
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `GridParse` if it is malformed
pub fn load_grid(path: &Path) -> Result<BlockGrid> {
    let contents =
        std::fs::read_to_string(path).map_err(|err| file_system_error(path, "read", err))?;
    parse_grid(&contents)
}

/// Render a grid in the text format, one line per row
pub fn render_grid(grid: &impl BlockSource) -> String {
    render_with(grid, |_| None)
}

/// Render a grid with the islands of a solution drawn over it
pub fn render_solution(grid: &impl BlockSource, solution: &Solution) -> String {
    render_with(grid, |coord| {
        solution
            .groups
            .iter()
            .find(|group| group.cells.contains(&coord))
            .map(|group| group.material.symbol())
    })
}

fn render_with(grid: &impl BlockSource, overlay: impl Fn([i32; 2]) -> Option<char>) -> String {
    let (rows, cols) = grid.extent();
    let mut out = String::with_capacity(rows * (cols + 1));
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            let coord = [row, col];
            out.push(overlay(coord).unwrap_or_else(|| block_symbol(grid.block(coord))));
        }
        out.push('\n');
    }
    out
}

/// Write text to disk
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn save_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|err| file_system_error(path, "write", err))
}
