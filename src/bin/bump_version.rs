#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use release_tools::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_bump_args();

    // Setup logging based on debug flag
    setup_logging(args.common.debug)?;

    // Resolve the build number and file location
    let config = Config::from_bump_args(&args)?;

    cli::execute_bump(&config)
}
