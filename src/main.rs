use anyhow::Result;
use tempband::cli;
use tempband::commands::{handle_classify, ClassifyConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    handle_classify(ClassifyConfig { format: cli.format })
}
