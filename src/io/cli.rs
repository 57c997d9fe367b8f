//! Command-line interface for solving grid files in batch

use crate::algorithm::search::solve;
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_TIMEOUT_MS, GENERATED_OBSTACLE_RATIO, GENERATED_TARGET_RATIO,
    IslandConfig, MAX_ISLAND_SIZE, MAX_SHAPES_PER_TARGET, MIN_ISLAND_SIZE, OUTPUT_SUFFIX,
    UNIT_ISLAND_COST,
};
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::image::{export_solution_png, load_grid_png};
use crate::io::progress::ProgressManager;
use crate::io::text::{load_grid, render_grid, render_solution, save_text};
use crate::spatial::grid::BlockGrid;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "islandcover")]
#[command(
    author,
    version,
    about = "Place tethered islands to cover target cells on a grid"
)]
/// Command-line arguments for the island placement tool
pub struct Cli {
    /// Grid file (.txt or .png) or directory of grid files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Wall-clock budget per grid in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Maximum candidate shapes kept per target cell
    #[arg(short = 'k', long, default_value_t = MAX_SHAPES_PER_TARGET)]
    pub max_shapes: usize,

    /// Smallest island size
    #[arg(long, default_value_t = MIN_ISLAND_SIZE)]
    pub min_size: usize,

    /// Largest island size
    #[arg(long, default_value_t = MAX_ISLAND_SIZE)]
    pub max_size: usize,

    /// Score deducted per placed island
    #[arg(short = 'c', long, default_value_t = UNIT_ISLAND_COST)]
    pub island_cost: f64,

    /// Also export each result as a PNG image
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Write a random ROWSxCOLS grid to TARGET before solving it
    #[arg(short, long, value_name = "ROWSxCOLS")]
    pub generate: Option<String>,

    /// Seed for grid generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration assembled from the flags
    pub const fn island_config(&self) -> IslandConfig {
        IslandConfig {
            min_island_size: self.min_size,
            max_island_size: self.max_size,
            max_shapes_per_target: self.max_shapes,
            timeout: Duration::from_millis(self.timeout_ms),
            unit_island_cost: self.island_cost,
        }
    }
}

/// Parse a `ROWSxCOLS` dimension string
///
/// # Errors
///
/// Returns `InvalidParameter` if the string is not two positive integers joined by `x`
pub fn parse_dimensions(value: &str) -> Result<(usize, usize)> {
    let invalid = || invalid_parameter("generate", &value, &"expected ROWSxCOLS, e.g. 24x32");
    let (rows, cols) = value
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let rows: usize = rows
        .trim()
        .parse()
        .map_err(|err| invalid_parameter("generate", &value, &err))?;
    let cols: usize = cols
        .trim()
        .parse()
        .map_err(|err| invalid_parameter("generate", &value, &err))?;
    if rows == 0 || cols == 0 {
        return Err(invalid());
    }
    Ok((rows, cols))
}

fn is_grid_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("txt" | "png")
    )
}

/// Orchestrates batch solving of grid files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve grids according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, grid generation or loading
    /// fails, or results cannot be written
    pub fn process(&mut self) -> Result<()> {
        self.cli.island_config().validate()?;

        if let Some(dimensions) = self.cli.generate.clone() {
            self.generate_target(&dimensions)?;
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn generate_target(&self, dimensions: &str) -> Result<()> {
        let (rows, cols) = parse_dimensions(dimensions)?;
        let grid = BlockGrid::random(
            rows,
            cols,
            GENERATED_TARGET_RATIO,
            GENERATED_OBSTACLE_RATIO,
            self.cli.seed,
        );
        save_text(&self.cli.target, &render_grid(&grid))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_grid_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a .txt or .png grid"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_grid_file(&path)
                    && !Self::is_result_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a grid file or directory"))
        }
    }

    fn is_result_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, "txt");
        if output_path.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn load(input_path: &Path) -> Result<BlockGrid> {
        if input_path.extension().and_then(|s| s.to_str()) == Some("png") {
            load_grid_png(input_path)
        } else {
            load_grid(input_path)
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let grid = Self::load(input_path)?;
        let solution = solve(&grid, &self.cli.island_config())?;

        save_text(
            &Self::get_output_path(input_path, "txt"),
            &render_solution(&grid, &solution),
        )?;

        if self.cli.png {
            export_solution_png(
                &grid,
                &solution,
                &Self::get_output_path(input_path, "png"),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(input_path, &solution, start_time.elapsed());
        }

        Ok(())
    }

    /// Path of the result file written for an input grid
    pub fn get_output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.{extension}", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
