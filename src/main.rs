//! Rotworld entry point
//!
//! Generates a maze level and prints it. The physics world and renderer
//! consume the same `Level` data.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rotworld::maze::analysis;
use rotworld::{LabelMerge, Settings};

#[derive(Parser, Debug)]
#[command(name = "rotworld", about = "Generate a perfect-maze level")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Cells per row
    #[arg(long)]
    width: Option<usize>,

    /// Rows
    #[arg(long)]
    height: Option<usize>,

    /// World units per cell
    #[arg(long)]
    grid_size: Option<f32>,

    /// Seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Relabel only the adjacent cell on horizontal joins (may leave loops)
    #[arg(long)]
    legacy_labels: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = match &self.settings {
            Some(path) => Settings::load_or_default(path),
            None => Settings::default(),
        };

        if let Some(width) = self.width {
            settings.grid_width = width;
        }
        if let Some(height) = self.height {
            settings.grid_height = height;
        }
        if let Some(grid_size) = self.grid_size {
            settings.grid_size = grid_size;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.legacy_labels {
            settings.generator.label_merge = LabelMerge::AdjacentOnly;
        }
        settings
    }
}

fn run(args: &Args) -> rotworld::Result<()> {
    let settings = args.settings();
    let seed = settings.resolve_seed();
    log::info!(
        "Rotworld starting: {}x{} maze, seed {}",
        settings.grid_width,
        settings.grid_height,
        seed
    );

    let (maze, level) = settings.build_level(seed)?;

    if !analysis::is_perfect(&maze) {
        log::warn!(
            "Maze is not perfect: first loop-closing wall {:?}",
            analysis::first_redundant_edge(&maze)
        );
    }

    print!("{maze}");
    println!(
        "seed {}: {} walls ({} inner), player at ({}, {})",
        seed,
        level.walls.len(),
        level.inner_walls().len(),
        level.player.position.x,
        level.player.position.y
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
