//! CLI command implementations for tempband.
//!
//! - **classify**: read a temperature from stdin and print its band label

pub mod classify;

pub use classify::{handle_classify, run_with_io, ClassifyConfig};
