// Export modules for library usage
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::classifier::{
    classify, classify_label, Classification, TemperatureBand, NORMAL_MAX, NORMAL_MIN,
};
pub use crate::errors::Error;
pub use crate::io::{parse_temperature, read_temperature, OutputFormat};
