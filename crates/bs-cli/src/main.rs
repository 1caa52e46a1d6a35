//! CLI frontend for the Blindspot colorblindness screening test.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blindspot",
    about = "Blindspot — Ishihara plate colorblindness screening",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the screening test interactively
    Test {
        /// JSON plate catalog (default: built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// RNG seed for a reproducible session (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Plates drawn per test type
        #[arg(short, long, default_value = "10")]
        plates: usize,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the test types of a catalog and check it can supply a session
    Catalog {
        /// JSON plate catalog (default: built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Plates drawn per test type
        #[arg(short, long, default_value = "10")]
        plates: usize,
    },

    /// Describe the color vision deficiencies the test screens for
    Conditions,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Test {
            catalog,
            seed,
            plates,
            json,
        } => commands::test::run(catalog.as_deref(), seed, plates, json),
        Commands::Catalog { catalog, plates } => commands::catalog::run(catalog.as_deref(), plates),
        Commands::Conditions => commands::conditions::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
