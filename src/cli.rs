// Clap definitions in derive style

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use recman::table::DEFAULT_WIDTH;

#[derive(Parser)]
#[command(name = "recman", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Maximum line width of the table listing
    #[arg(short = 'w', long = "width", default_value_t = DEFAULT_WIDTH, global = true)]
    pub width: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage a list of songs
    Songs(SeedArgs),

    /// Manage a list of people
    People(SeedArgs),
}

#[derive(Args)]
pub struct SeedArgs {
    /// CSV file with extra records to start with
    #[arg(short = 's', long = "seed", value_name = "CSV")]
    pub seed: Option<PathBuf>,

    /// Start without the built-in sample records
    #[arg(long = "no-samples", default_value_t = false)]
    pub no_samples: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
