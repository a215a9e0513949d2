#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use release_tools::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    let args = cli::parse_tag_args();

    setup_logging(args.common.debug)?;

    let config = Config::from_tag_args(&args)?;

    cli::execute_tag(&config)
}
