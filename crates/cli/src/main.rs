//! Fanout CLI - fanout command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

/// Fanout - repost reach analysis for post tables
#[derive(Parser)]
#[command(name = "fanout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute total reach for every original post in a table
    Analyze {
        /// Path to the post table (header: postId, repostId, followers)
        table: PathBuf,

        /// Emit results as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
    /// Show what to add and remove to turn one collection into another
    Diff {
        /// Current elements (comma-separated integers)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        current: Vec<i64>,

        /// Target elements (comma-separated integers)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        target: Vec<i64>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { table, json } => cmd::analyze::run(&table, json),
        Commands::Diff { current, target } => cmd::diff::run(&current, &target),
    }
}
