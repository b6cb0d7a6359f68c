mod classifier;
mod cli;
mod error;
mod export;
mod ingest;
mod ledger;
mod models;
mod normalizer;
mod ordering;
mod parsers;
mod reader;
mod render;
mod settings;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary { files } => cli::summary::run(&files),
        Commands::List { files, limit } => cli::list::run(&files, limit),
        Commands::Export { files, output } => cli::export::run(&files, &output),
        Commands::Session => cli::session::run(),
        Commands::Config {
            currency,
            limit,
            no_limit,
        } => cli::config::run(currency, limit, no_limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
