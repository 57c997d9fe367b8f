//! PNG grid loading and solution export
//!
//! Grid images map one pixel to one cell: dark pixels are obstacles, red-dominant
//! pixels are targets, everything else is empty.

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

use crate::algorithm::solution::{Material, Solution};
use crate::io::error::{IslandError, Result, file_system_error};
use crate::spatial::grid::{Block, BlockGrid, BlockSource};

// Pixels at or below this brightness are treated as obstacles
const OBSTACLE_LUMA_THRESHOLD: u16 = 64;

/// Display color of a block in exported images
pub const fn block_color(block: Block) -> Rgba<u8> {
    match block {
        Block::Empty => Rgba([255, 255, 255, 255]),
        Block::Target => Rgba([220, 30, 30, 255]),
        Block::Obstacle => Rgba([0, 0, 0, 255]),
    }
}

/// Display color of an island cell in exported images
pub const fn material_color(material: Material) -> Rgba<u8> {
    match material {
        Material::Slime => Rgba([110, 200, 80, 255]),
        Material::Honey => Rgba([240, 170, 40, 255]),
    }
}

/// Classify a single pixel
pub fn classify_pixel(pixel: Rgba<u8>) -> Block {
    let [r, g, b, _] = pixel.0;
    let luma = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    if luma <= OBSTACLE_LUMA_THRESHOLD {
        Block::Obstacle
    } else if r > 127 && u16::from(r) > u16::from(g) + 60 && u16::from(r) > u16::from(b) + 60 {
        Block::Target
    } else {
        Block::Empty
    }
}

/// Convert a decoded image into a grid, one cell per pixel
pub fn grid_from_image(img: &RgbaImage) -> BlockGrid {
    let (width, height) = img.dimensions();
    let blocks = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        classify_pixel(*img.get_pixel(col as u32, row as u32))
    });
    BlockGrid::from_array(blocks)
}

/// Load a grid from a PNG file
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_grid_png(path: &Path) -> Result<BlockGrid> {
    let img = image::open(path)
        .map_err(|source| IslandError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    Ok(grid_from_image(&img))
}

/// Draw a solution over its grid
pub fn render_solution_image(grid: &impl BlockSource, solution: &Solution) -> RgbaImage {
    let (rows, cols) = grid.extent();
    let mut img = ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        block_color(grid.block([y as i32, x as i32]))
    });

    for group in &solution.groups {
        let color = material_color(group.material);
        for &[row, col] in &group.cells {
            if let Some(pixel) = img.get_pixel_mut_checked(col as u32, row as u32) {
                *pixel = color;
            }
        }
    }

    img
}

/// Export a solution as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_png(
    grid: &impl BlockSource,
    solution: &Solution,
    output_path: &Path,
) -> Result<()> {
    let img = render_solution_image(grid, solution);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|source| IslandError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
