//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Print runtime info and exercise the creature accessors
#[derive(Parser, Debug)]
#[command(name = "creature_demo")]
#[command(about = "Print runtime info and exercise the creature accessors")]
pub struct Args {
    /// TOML file with offense_power / defense_power overrides
    pub settings: Option<PathBuf>,

    /// Dump the final creature state as JSON
    #[arg(long)]
    pub json: bool,
}
