mod cli;

use std::io::{self, Write};

use clap::Parser;
use log::{error, info};

use recman::{App, Console, Person, Record, Song, seed};

use crate::cli::{Cli, Commands, SeedArgs};

fn run_menu<T: Record>(args: &SeedArgs, width: usize) -> recman::Result<()> {
    let list = seed::initial_list::<T>(!args.no_samples, args.seed.as_deref())?;

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut app = App::new(list, console).with_table_width(width);
    app.run()?;

    let (list, mut console) = app.into_parts();
    console.output().flush()?;
    info!("Leaving with {} {}", list.len(), T::PLURAL);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let result = match &cli.command {
        Commands::Songs(args) => run_menu::<Song>(args, cli.width),
        Commands::People(args) => run_menu::<Person>(args, cli.width),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
