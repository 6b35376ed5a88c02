use clap::Parser;
use eyre::{Result, ensure};
use rplacer::config::Config;
use rplacer::display::*;
use rplacer::loaders::{Loader, save_placements};
use rplacer::model::Assignments;
use rplacer::{allocate, checks};
use std::path::{Path, PathBuf};
use tracing::{Level, info};

const DEFAULT_CONFIG: &str = "rplacer.toml";

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Use FILE instead of rplacer.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read firms from FILE (name,quota)
    #[arg(long, value_name = "FILE")]
    firms: Option<PathBuf>,
    /// Read students from FILE (name,score,choice1,...)
    #[arg(long, value_name = "FILE")]
    students: Option<PathBuf>,
    /// Write placements as CSV to FILE
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Fail if some students could not be placed
    #[arg(long)]
    strict: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match args.config {
        Some(path) => Config::load(&path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG))?,
        None => Config::default(),
    };
    let loader = Loader::new(
        args.firms.unwrap_or(config.input.firms),
        args.students.unwrap_or(config.input.students),
    );
    let (students, firms) = loader.load()?;
    checks::warn_duplicate_firms(&firms);
    checks::warn_unknown_preferences(&students, &firms);

    let placements = allocate(&students, &firms);
    let assignments = Assignments::new(&students, &firms, &placements);
    checks::check_quotas(&assignments)?;
    if let Some(output) = &args.output {
        save_placements(output, &placements)?;
        info!(path = %output.display(), "placements saved");
    }

    display_firms(&firms);
    println!();
    display_results(&placements);
    if config.display.details {
        display_details(&assignments);
    }
    if config.display.stats {
        display_stats(&assignments);
    }
    if config.display.unfilled {
        display_unfilled(&assignments);
    }
    if args.strict {
        let unassigned = assignments.unassigned_students().len();
        ensure!(
            unassigned == 0,
            "{} students could not get placed in any firm",
            unassigned
        );
    }
    Ok(())
}
