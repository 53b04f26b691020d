//! CLI module for tempband
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

use clap::Parser;

pub mod args;
pub mod setup;

pub use args::Cli;
pub use setup::{init_logging, level_for_verbosity};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
