//! Build number bumping
//!
//! Rewrites the `versionCode` declaration of the build configuration in place.

use crate::{
    core::{
        declaration::DeclarationScanner,
        version::{BuildNumber, VERSION_CODE_KEY},
    },
    error::Result,
    utils::fs::FileSystemUtils,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Result of a bump run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// File that was (or would have been) rewritten
    pub path: PathBuf,
    /// Raw value the declaration held before the run
    pub previous: String,
    /// Build number now declared
    pub current: BuildNumber,
    /// Whether the file content differs from what it was
    pub changed: bool,
    /// Whether the file was written
    pub written: bool,
}

/// Sets `versionCode` in a build configuration file
#[derive(Debug)]
pub struct VersionBumper {
    scanner: DeclarationScanner,
    fs_utils: FileSystemUtils,
}

impl VersionBumper {
    /// Create a new version bumper
    pub fn new() -> Result<Self> {
        Ok(Self {
            scanner: DeclarationScanner::new()?,
            fs_utils: FileSystemUtils::new(),
        })
    }

    /// Replace the `versionCode` declaration in `path` with `build_number`.
    ///
    /// The file is only written once the new content is fully computed, so
    /// every failure leaves it untouched. Content that already declares
    /// `build_number` in canonical form is not rewritten.
    #[instrument(skip(self))]
    pub fn bump<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        build_number: BuildNumber,
        dry_run: bool,
    ) -> Result<BumpOutcome> {
        let path = path.as_ref();
        let content = self.fs_utils.read_config(path)?;

        let previous = self.scanner.find(&content, VERSION_CODE_KEY)?.value.to_string();
        let updated = self.scanner.replace_version_code(&content, build_number)?;
        let changed = updated != content;

        let mut outcome = BumpOutcome {
            path: path.to_path_buf(),
            previous,
            current: build_number,
            changed,
            written: false,
        };

        if !changed {
            info!(
                "{} already at {} in {}",
                VERSION_CODE_KEY,
                build_number,
                path.display()
            );
            return Ok(outcome);
        }

        info!(
            "Setting {} to {} (was {}) in {}",
            VERSION_CODE_KEY,
            build_number,
            outcome.previous,
            path.display()
        );

        if dry_run {
            info!("Dry run: {} not written", path.display());
            return Ok(outcome);
        }

        self.fs_utils.overwrite_file(path, updated)?;
        outcome.written = true;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use std::fs;
    use tempfile::TempDir;

    fn build_number(n: u64) -> BuildNumber {
        BuildNumber::new(n).unwrap()
    }

    #[test]
    fn test_bump_rewrites_version_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.kt");
        fs::write(&path, "versionName = \"2.0.0\"\nversionCode = 7\n").unwrap();

        let bumper = VersionBumper::new().unwrap();
        let outcome = bumper.bump(&path, build_number(8), false).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "versionName = \"2.0.0\"\nversionCode = 8\n"
        );
        assert_eq!(outcome.previous, "7");
        assert_eq!(outcome.current, build_number(8));
        assert!(outcome.changed);
        assert!(outcome.written);
    }

    #[test]
    fn test_bump_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.kt");
        fs::write(&path, "// header\nversionCode = 7\nversionName = \"1.0\"\n").unwrap();

        let bumper = VersionBumper::new().unwrap();
        bumper.bump(&path, build_number(9), false).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let outcome = bumper.bump(&path, build_number(9), false).unwrap();
        assert!(!outcome.changed);
        assert!(!outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_bump_dry_run_leaves_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.kt");
        fs::write(&path, "versionCode = 7\n").unwrap();

        let bumper = VersionBumper::new().unwrap();
        let outcome = bumper.bump(&path, build_number(8), true).unwrap();

        assert!(outcome.changed);
        assert!(!outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "versionCode = 7\n");
    }

    #[test]
    fn test_bump_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.kt");

        let bumper = VersionBumper::new().unwrap();
        let result = bumper.bump(&path, build_number(8), false);

        assert!(matches!(
            result,
            Err(ReleaseError::MissingConfigFile { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_bump_without_declaration_fails_and_keeps_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.kt");
        fs::write(&path, "versionName = \"1.0\"\n").unwrap();

        let bumper = VersionBumper::new().unwrap();
        let result = bumper.bump(&path, build_number(8), false);

        assert!(matches!(
            result,
            Err(ReleaseError::MalformedDeclaration { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "versionName = \"1.0\"\n");
    }

    #[test]
    fn test_bump_replaces_non_numeric_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.kt");
        fs::write(&path, "    const val versionCode = TODO_CI\n").unwrap();

        let bumper = VersionBumper::new().unwrap();
        let outcome = bumper.bump(&path, build_number(100), false).unwrap();

        assert_eq!(outcome.previous, "TODO_CI");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "    const val versionCode = 100\n"
        );
    }
}
