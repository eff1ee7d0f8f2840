//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// REST collection and href helper CLI
#[derive(Parser, Debug)]
#[command(name = "rest-common")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply offset/limit pagination to the ids 0..count
    Limit {
        /// Number of items in the collection
        #[arg(long)]
        count: u64,

        /// Query string or request path (`offset=1&limit=3`, `/?offset=1`)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Override the configured maximum page size
        #[arg(long)]
        max_limit: Option<usize>,
    },

    /// Apply marker/limit pagination to the ids 0..count
    Marker {
        /// Number of items in the collection
        #[arg(long)]
        count: u64,

        /// Query string or request path (`marker=4&limit=2`)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Override the configured maximum page size
        #[arg(long)]
        max_limit: Option<usize>,
    },

    /// Show validated marker/limit parameters
    Params {
        /// Query string or request path
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Remove the version segment from an href
    StripVersion {
        /// Href to rewrite
        href: String,
    },

    /// Print the trailing integer id of an href
    Id {
        /// Href to inspect
        href: String,
    },

    /// Print the trailing token of an href
    Uuid {
        /// Href to inspect
        href: String,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
