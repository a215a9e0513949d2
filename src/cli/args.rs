//! Command-line argument parsing
//!
//! Both tools run with zero arguments in CI; every flag only overrides a default.

use clap::{Args as ClapArgs, Parser};
use std::path::PathBuf;

/// Options shared by both tools
#[derive(ClapArgs, Debug, Clone)]
pub struct CommonArgs {
    /// Build configuration file [default: buildSrc/src/main/kotlin/Config.kt]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "work-dir", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show what would happen without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Set versionCode in the build configuration to the CI pipeline number
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "bump-version")]
pub struct BumpArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Use this build number instead of reading it from the environment
    #[arg(long, value_name = "N")]
    pub build_number: Option<String>,

    /// Environment variable holding the build number [default: CI_PIPELINE_IID]
    #[arg(long, value_name = "NAME")]
    pub build_number_var: Option<String>,
}

/// Tag HEAD as "<versionName>(<versionCode>)" and push tags to the remote
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "tag-release")]
pub struct TagArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Remote to push tags to
    #[arg(long, default_value = "origin")]
    pub remote: String,

    /// git executable to run
    #[arg(long, value_name = "PROGRAM", default_value = "git")]
    pub git: String,

    /// Create the tag locally without pushing
    #[arg(long)]
    pub no_push: bool,
}

/// Parse `bump-version` arguments
pub fn parse_bump_args() -> BumpArgs {
    BumpArgs::parse()
}

/// Parse `tag-release` arguments
pub fn parse_tag_args() -> TagArgs {
    TagArgs::parse()
}
