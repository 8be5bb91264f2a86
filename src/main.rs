//! # BASIC
//!
//! A line-numbered integer BASIC.
//!

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "basic")]
#[command(about = "A line-numbered integer BASIC interpreter", version)]
struct Cli {
    /// Program file of numbered lines to load before the prompt
    file: Option<PathBuf>,

    /// Statements executed between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(error) = basic::term::main(cli.file.as_deref(), cli.cycles.max(1)) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
