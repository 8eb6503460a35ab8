//! screenshot-eval CLI - render quality metrics for screenshots

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;

/// Quantitative quality metrics for rendered screenshots.
#[derive(Parser)]
#[command(name = "screenshot-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze screenshots (the latest in --dir when no paths are given)
    Analyze {
        /// Screenshot files to analyze
        paths: Vec<PathBuf>,

        /// Directory searched for the latest screenshot
        #[arg(long, env = "SCREENSHOT_DIR", default_value = "Screenshots")]
        dir: PathBuf,

        /// Print the structured report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Run the analyzers on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// List screenshots in a directory, sorted by file name
    List {
        /// Screenshot directory
        #[arg(long, env = "SCREENSHOT_DIR", default_value = "Screenshots")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze { paths, dir, json, sequential } => {
            commands::analyze::run(paths, &dir, json, sequential)
        }
        Commands::List { dir } => commands::list::run(&dir),
    }
}
