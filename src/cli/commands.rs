//! Command implementations for the CLI

use crate::{
    config::Config,
    core::{
        bumper::VersionBumper,
        tagger::{ReleaseTagger, TagMode},
        vcs::GitCli,
    },
    error::ReleaseError,
    utils::process::ProcessRunner,
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute `bump-version`
#[instrument(skip(config))]
pub fn execute_bump(config: &Config) -> anyhow::Result<()> {
    let path = config.build_config_path();
    let build_number = config
        .bump
        .build_number
        .ok_or_else(|| ReleaseError::missing_env(&config.bump.build_number_var))?;

    info!("Bumping {} to build {}", path.display(), build_number);

    let bumper = VersionBumper::new()?;
    let outcome = bumper
        .bump(&path, build_number, config.dry_run)
        .with_context(|| format!("Failed to bump version in {}", path.display()))?;

    if outcome.written {
        info!("versionCode updated: {} -> {}", outcome.previous, outcome.current);
    }

    Ok(())
}

/// Execute `tag-release`
#[instrument(skip(config))]
pub fn execute_tag(config: &Config) -> anyhow::Result<()> {
    let path = config.build_config_path();

    let runner = ProcessRunner::new(config.debug).in_dir(&config.work_dir);
    let git = GitCli::new(config.tag.git_program.clone(), runner);
    let tagger = ReleaseTagger::new(git)?;

    let mode = if config.dry_run {
        TagMode::DryRun
    } else if config.tag.push {
        TagMode::CreateAndPush
    } else {
        TagMode::CreateOnly
    };

    let outcome = tagger
        .tag(&path, &config.tag.remote, mode)
        .with_context(|| format!("Failed to tag release from {}", path.display()))?;

    match (outcome.created, outcome.pushed) {
        (true, true) => info!("Tag {} created and pushed to {}", outcome.tag, config.tag.remote),
        (true, false) => info!("Tag {} created locally", outcome.tag),
        _ => info!("Tag {} not created (dry run)", outcome.tag),
    }

    Ok(())
}
