pub mod input;
pub mod output;

pub use input::{parse_temperature, read_temperature};
pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TextWriter};
