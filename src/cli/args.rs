use crate::io::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tempband")]
#[command(
    about = "Classify a Fahrenheit temperature read from stdin",
    long_about = "Reads one integer temperature in degrees Fahrenheit from standard input \
and prints \"High temperature\" (above 85), \"Normal temperature\" (50 to 85) \
or \"Low temperature\" (below 50)."
)]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = "text",
        env = "TEMPBAND_FORMAT"
    )]
    pub format: OutputFormat,

    /// Increase diagnostic logging on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
