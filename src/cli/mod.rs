//! CLI module
//!
//! Command-line interface for running provider queries outside the host.
//!
//! # Commands
//!
//! - `books` - Query the books collection
//! - `highlights` - Query the highlights collection

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, QueryArgs};
pub use runner::Runner;
