//! CLI entry point for rendering pattern formulas

use clap::Parser;
use wallpattern::io::cli::{Cli, FileProcessor};

fn main() -> wallpattern::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
