use std::path::Path;

use atlas_tools::{Result, ToolError, convert};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(_cli: Cli) -> Result<()> {
    init_logging()?;

    let species = Path::new(convert::SPECIES_TABLE);
    if !species.exists() {
        return Err(ToolError::MissingInput(species.to_path_buf()));
    }
    let info = Path::new(convert::INFO_TABLE);
    if !info.exists() {
        return Err(ToolError::MissingInput(info.to_path_buf()));
    }

    convert::csv_to_json(species, info, Path::new(convert::OUTPUT_DOCUMENT))
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

/// The tool reads its fixed inputs from the working directory; the only
/// arguments it accepts are `--help` and `--version`.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Aggregate species observation tables into the atlas JSON document."
)]
struct Cli {}
