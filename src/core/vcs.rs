//! Version control collaborator
//!
//! The tagger only needs two operations from version control. They sit behind
//! [`TagPublisher`] so the release flow can be exercised without a repository.

use crate::{core::version::ReleaseTag, error::Result, utils::process::ProcessRunner};
use tracing::{info, instrument};

/// Tag operations the release tagger relies on.
///
/// Both calls block until the operation has finished and report failure as
/// [`crate::error::ReleaseError::TagOperationFailed`].
pub trait TagPublisher {
    /// Create a lightweight tag at the current HEAD commit
    fn create_tag(&self, tag: &ReleaseTag) -> Result<()>;

    /// Push all local tags to `remote`
    fn push_tags(&self, remote: &str) -> Result<()>;
}

/// [`TagPublisher`] backed by the system `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    process_runner: ProcessRunner,
}

impl GitCli {
    /// Create a git client running `program` through `process_runner`
    pub fn new(program: impl Into<String>, process_runner: ProcessRunner) -> Self {
        Self {
            program: program.into(),
            process_runner,
        }
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let result = self.process_runner.run_command_with_output(&self.program, args)?;
        for line in result.stderr.lines().filter(|l| !l.trim().is_empty()) {
            info!("git: {}", line);
        }
        Ok(())
    }
}

impl TagPublisher for GitCli {
    #[instrument(skip(self))]
    fn create_tag(&self, tag: &ReleaseTag) -> Result<()> {
        self.git(&["tag", tag.as_str()])
    }

    #[instrument(skip(self))]
    fn push_tags(&self, remote: &str) -> Result<()> {
        self.git(&["push", remote, "--tags"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::BuildNumber;
    use crate::error::ReleaseError;
    use tempfile::TempDir;

    fn git_available() -> bool {
        std::process::Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn init_repo(dir: &std::path::Path) {
        let runner = ProcessRunner::new(false).in_dir(dir);
        runner.run_command_with_output("git", &["init", "-q"]).unwrap();
        runner
            .run_command_with_output(
                "git",
                &[
                    "-c",
                    "user.name=CI",
                    "-c",
                    "user.email=ci@example.com",
                    "commit",
                    "-q",
                    "--allow-empty",
                    "-m",
                    "init",
                ],
            )
            .unwrap();
    }

    #[test]
    fn test_create_tag_in_repository() {
        if !git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());

        let git = GitCli::new("git", ProcessRunner::new(false).in_dir(temp_dir.path()));
        let tag = ReleaseTag::new("1.2.3", BuildNumber::new(42).unwrap()).unwrap();
        git.create_tag(&tag).unwrap();

        let listed = ProcessRunner::new(false)
            .in_dir(temp_dir.path())
            .run_command_with_output("git", &["tag", "--list"])
            .unwrap();
        assert_eq!(listed.stdout.trim(), "1.2.3(42)");
    }

    #[test]
    fn test_duplicate_tag_fails_with_stderr() {
        if !git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());

        let git = GitCli::new("git", ProcessRunner::new(false).in_dir(temp_dir.path()));
        let tag = ReleaseTag::new("1.0.0", BuildNumber::new(1).unwrap()).unwrap();
        git.create_tag(&tag).unwrap();

        match git.create_tag(&tag) {
            Err(ReleaseError::TagOperationFailed { stderr, .. }) => {
                assert!(stderr.contains("already exists"), "{stderr}");
            }
            other => panic!("Expected TagOperationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_push_to_unknown_remote_fails() {
        if !git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());

        let git = GitCli::new("git", ProcessRunner::new(false).in_dir(temp_dir.path()));
        let result = git.push_tags("nowhere");
        assert!(matches!(
            result,
            Err(ReleaseError::TagOperationFailed { .. })
        ));
    }

    #[test]
    fn test_missing_git_program() {
        let git = GitCli::new("nonexistent_git_12345", ProcessRunner::new(false));
        let tag = ReleaseTag::new("1.0.0", BuildNumber::new(1).unwrap()).unwrap();
        assert!(matches!(
            git.create_tag(&tag),
            Err(ReleaseError::TagOperationFailed { exit_code: None, .. })
        ));
    }
}
