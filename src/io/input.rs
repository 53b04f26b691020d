use crate::errors::{Error, Result};
use std::io::BufRead;
use tracing::debug;

/// Parse one line of text as a Fahrenheit temperature.
///
/// Surrounding whitespace is trimmed; an optional `+` or `-` sign is accepted.
pub fn parse_temperature(text: &str) -> Result<i32> {
    let trimmed = text.trim();
    trimmed
        .parse::<i32>()
        .map_err(|source| Error::parse(trimmed, source))
}

/// Read the first line from `reader` and parse it as a temperature.
///
/// Anything after the first line is ignored.
pub fn read_temperature<R: BufRead>(mut reader: R) -> Result<i32> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::MissingInput);
    }
    debug!(line = %line.trim_end(), "read input line");

    let temperature = parse_temperature(&line)?;
    debug!(temperature, "parsed temperature");
    Ok(temperature)
}
