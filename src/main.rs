mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default = if verbose { "tdhistory=debug" } else { "tdhistory=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { force } => cli::init::run(force),
        Commands::Parse {
            snapshot,
            format,
            output,
            balance,
            csv,
        } => cli::parse::run(&snapshot, format, output.as_deref(), balance.as_deref(), csv),
        Commands::Balance { snapshot, csv } => cli::balance::run(&snapshot, csv),
        Commands::Columns => cli::columns::run(),
        Commands::QueryDates { start, end } => cli::query_dates::run(&start, end.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
