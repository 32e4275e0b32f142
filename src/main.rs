mod categorizer;
mod cli;
mod error;
mod exporter;
mod fmt;
mod loader;
mod models;
mod reports;
mod schema;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
