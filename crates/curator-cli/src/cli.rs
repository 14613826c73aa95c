//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the library snapshot.
pub const DEFAULT_LIBRARY: &str = "library.json";

/// Curator: admission and cataloging of short articles
#[derive(Parser)]
#[command(name = "curator")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a batch of articles to the library
    Submit {
        /// Path to a JSON array of articles
        #[arg(value_name = "BATCH")]
        batch: PathBuf,

        /// Path to the library snapshot (created if missing)
        #[arg(short, long, default_value = DEFAULT_LIBRARY)]
        library: PathBuf,
    },

    /// Show which articles of a batch would be admitted
    Prepare {
        /// Path to a JSON array of articles
        #[arg(value_name = "BATCH")]
        batch: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the catalog of known titles
    Catalog {
        /// Path to the library snapshot
        #[arg(short, long, default_value = DEFAULT_LIBRARY)]
        library: PathBuf,
    },
}
