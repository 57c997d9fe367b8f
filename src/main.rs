//! CLI entry point for the island placement solver

use clap::Parser;
use islandcover::io::cli::{Cli, FileProcessor};

fn main() -> islandcover::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
