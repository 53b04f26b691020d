use crate::classifier::Classification;
use crate::io::{self, OutputFormat};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

pub struct ClassifyConfig {
    pub format: OutputFormat,
}

/// Classify the temperature on stdin and print the result to stdout
pub fn handle_classify(config: ClassifyConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Read one temperature from `reader`, write its classification to `writer`
pub fn run_with_io<R: BufRead, W: Write>(
    config: &ClassifyConfig,
    reader: R,
    writer: W,
) -> Result<Classification> {
    let temperature = io::read_temperature(reader)?;
    let classification = Classification::of(temperature);
    info!(temperature, band = ?classification.band, "classified temperature");

    io::create_writer(config.format, writer)
        .write_classification(&classification)
        .context("Failed to write classification")?;

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::TemperatureBand;
    use crate::errors::Error;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(format: OutputFormat, input: &str) -> (Result<Classification>, String) {
        let config = ClassifyConfig { format };
        let mut out = Vec::new();
        let result = run_with_io(&config, Cursor::new(input), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scenarios_print_labels() {
        for (input, expected) in [
            ("90\n", "High temperature\n"),
            ("70\n", "Normal temperature\n"),
            ("10\n", "Low temperature\n"),
        ] {
            let (result, out) = run(OutputFormat::Text, input);
            assert!(result.is_ok());
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn test_returns_classification() {
        let (result, _) = run(OutputFormat::Text, " 86 ");
        let classification = result.unwrap();
        assert_eq!(classification.temperature, 86);
        assert_eq!(classification.band, TemperatureBand::High);
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let (result, out) = run(OutputFormat::Text, "abc\n");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Parse { .. })
        ));
        assert_eq!(out, "");
    }

    #[test]
    fn test_missing_input() {
        let (result, out) = run(OutputFormat::Json, "");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingInput)
        ));
        assert_eq!(out, "");
    }

    #[test]
    fn test_json_format() {
        let (result, out) = run(OutputFormat::Json, "70\n");
        assert!(result.is_ok());
        assert_eq!(
            out,
            "{\"temperature\":70,\"band\":\"normal\",\"label\":\"Normal temperature\"}\n"
        );
    }
}
