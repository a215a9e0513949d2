//! Configuration management for the release tools
//!
//! Centralizes every external input (file location, build number, git remote)
//! as explicit values and provides validation.

use crate::{
    cli::{BumpArgs, CommonArgs, TagArgs},
    core::version::BuildNumber,
    error::{ReleaseError, Result},
    utils::env::{BUILD_NUMBER_VAR, EnvUtils},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Default location of the build configuration, relative to the working directory
pub const DEFAULT_BUILD_CONFIG: &str = "buildSrc/src/main/kotlin/Config.kt";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Report what would change without writing files or running git
    pub dry_run: bool,
    /// Working directory for operations
    pub work_dir: PathBuf,
    /// Build configuration file, relative to `work_dir` unless absolute
    pub build_config: PathBuf,
    /// Version bump configuration
    pub bump: BumpConfig,
    /// Release tag configuration
    pub tag: TagConfig,
}

/// Version bump configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BumpConfig {
    /// New build number; resolved from the environment by the CLI layer
    pub build_number: Option<BuildNumber>,
    /// Environment variable the build number is read from
    pub build_number_var: String,
}

/// Release tag configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagConfig {
    /// Remote the tags are pushed to
    pub remote: String,
    /// git executable
    pub git_program: String,
    /// Push tags after creating them
    pub push: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            dry_run: false,
            work_dir: PathBuf::from("."),
            build_config: PathBuf::from(DEFAULT_BUILD_CONFIG),
            bump: BumpConfig {
                build_number: None,
                build_number_var: BUILD_NUMBER_VAR.to_string(),
            },
            tag: TagConfig::default(),
        }
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            git_program: "git".to_string(),
            push: true,
        }
    }
}

impl Config {
    fn from_common(common: &CommonArgs) -> Self {
        let mut config = Self {
            debug: common.debug,
            dry_run: common.dry_run,
            ..Self::default()
        };

        if let Some(work_dir) = &common.work_dir {
            config.work_dir = work_dir.clone();
        }
        if let Some(build_config) = &common.config {
            config.build_config = build_config.clone();
        }

        config
    }

    /// Create a bump configuration from command line arguments.
    ///
    /// This is the only place the build number is read from the environment.
    pub fn from_bump_args(args: &BumpArgs) -> Result<Self> {
        let mut config = Self::from_common(&args.common);
        if let Some(var) = &args.build_number_var {
            config.bump.build_number_var = var.clone();
        }

        config.validate()?;

        let raw = match &args.build_number {
            Some(value) => value.clone(),
            None => {
                debug!(
                    "Reading build number from {} (CI: {}, GitLab CI: {})",
                    config.bump.build_number_var,
                    EnvUtils::is_ci(),
                    EnvUtils::is_gitlab_ci()
                );
                EnvUtils::require_var(&config.bump.build_number_var)?
            }
        };
        config.bump.build_number = Some(raw.parse()?);

        Ok(config)
    }

    /// Create a tag configuration from command line arguments
    pub fn from_tag_args(args: &TagArgs) -> Result<Self> {
        let mut config = Self::from_common(&args.common);
        config.tag.remote = args.remote.clone();
        config.tag.git_program = args.git.clone();
        config.tag.push = !args.no_push;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.work_dir.is_dir() {
            return Err(ReleaseError::validation(format!(
                "Working directory not found: {}",
                self.work_dir.display()
            )));
        }

        let path = self.build_config_path();
        if !path.is_file() {
            return Err(ReleaseError::missing_config_file(path, None));
        }

        if self.tag.remote.trim().is_empty() {
            return Err(ReleaseError::validation("Remote name must not be empty"));
        }

        Ok(())
    }

    /// Resolved path of the build configuration file
    pub fn build_config_path(&self) -> PathBuf {
        self.work_dir.join(&self.build_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn common(dir: &TempDir) -> CommonArgs {
        CommonArgs {
            config: Some(PathBuf::from("Config.kt")),
            work_dir: Some(dir.path().to_path_buf()),
            debug: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.build_config, PathBuf::from(DEFAULT_BUILD_CONFIG));
        assert_eq!(config.bump.build_number_var, "CI_PIPELINE_IID");
        assert_eq!(config.tag.remote, "origin");
        assert_eq!(config.tag.git_program, "git");
        assert!(config.tag.push);
    }

    #[test]
    fn test_bump_with_explicit_build_number() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Config.kt"), "versionCode = 1\n").unwrap();

        let args = BumpArgs {
            common: common(&dir),
            build_number: Some("12".to_string()),
            build_number_var: None,
        };
        let config = Config::from_bump_args(&args).unwrap();
        assert_eq!(config.bump.build_number, Some(BuildNumber::new(12).unwrap()));
        assert_eq!(config.build_config_path(), dir.path().join("Config.kt"));
    }

    #[test]
    fn test_bump_with_unset_variable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Config.kt"), "versionCode = 1\n").unwrap();

        let args = BumpArgs {
            common: common(&dir),
            build_number: None,
            build_number_var: Some("RELEASE_TOOLS_UNSET_PIPELINE_ID".to_string()),
        };
        assert!(matches!(
            Config::from_bump_args(&args),
            Err(ReleaseError::MissingEnvironmentVariable { .. })
        ));
    }

    #[test]
    fn test_bump_with_invalid_build_number() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Config.kt"), "versionCode = 1\n").unwrap();

        let args = BumpArgs {
            common: common(&dir),
            build_number: Some("next".to_string()),
            build_number_var: None,
        };
        assert!(matches!(
            Config::from_bump_args(&args),
            Err(ReleaseError::InvalidBuildNumber { .. })
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let args = TagArgs {
            common: common(&dir),
            remote: "origin".to_string(),
            git: "git".to_string(),
            no_push: false,
        };
        assert!(matches!(
            Config::from_tag_args(&args),
            Err(ReleaseError::MissingConfigFile { .. })
        ));
    }

    #[test]
    fn test_tag_options() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Config.kt"), "versionCode = 1\n").unwrap();

        let args = TagArgs {
            common: common(&dir),
            remote: "upstream".to_string(),
            git: "/usr/bin/git".to_string(),
            no_push: true,
        };
        let config = Config::from_tag_args(&args).unwrap();
        assert_eq!(config.tag.remote, "upstream");
        assert_eq!(config.tag.git_program, "/usr/bin/git");
        assert!(!config.tag.push);
    }

    #[test]
    fn test_missing_work_dir() {
        let config = Config {
            work_dir: PathBuf::from("/nonexistent/release-tools/work-dir"),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReleaseError::Validation { .. })
        ));
    }
}
