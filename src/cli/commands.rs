//! CLI commands and argument parsing

use crate::types::Collection;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Readwise query provider CLI
#[derive(Parser, Debug)]
#[command(name = "readwise-provider")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Provider configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the books collection
    Books(QueryArgs),

    /// Query the highlights collection
    Highlights(QueryArgs),
}

impl Commands {
    /// Collection targeted by the command
    pub fn collection(&self) -> Collection {
        match self {
            Self::Books(_) => Collection::Books,
            Self::Highlights(_) => Collection::Highlights,
        }
    }

    /// Query arguments of the command
    pub fn args(&self) -> &QueryArgs {
        match self {
            Self::Books(args) | Self::Highlights(args) => args,
        }
    }
}

/// Where to read the query object from
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Inline query JSON, e.g. '{"filter": [...], "limit": ["number", 10]}'
    #[arg(long, conflicts_with = "query_file")]
    pub query: Option<String>,

    /// Query JSON file
    #[arg(long)]
    pub query_file: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON array
    Json,
    /// Pretty-printed JSON array
    Pretty,
    /// One line per record
    Summary,
}
