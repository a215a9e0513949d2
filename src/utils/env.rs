//! Environment variable handling
//!
//! The environment is only read while building a `Config` from command-line
//! arguments; the core receives explicit values.

use crate::error::{ReleaseError, Result};
use std::env;
use tracing::debug;

/// GitLab's project-scoped pipeline number, used as the build number
pub const BUILD_NUMBER_VAR: &str = "CI_PIPELINE_IID";

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Get a required environment variable.
    ///
    /// Unset, empty and non-unicode values are all reported as
    /// [`ReleaseError::MissingEnvironmentVariable`].
    pub fn require_var(key: &str) -> Result<String> {
        match env::var(key) {
            Ok(value) if !value.trim().is_empty() => {
                debug!("{} = {}", key, value);
                Ok(value)
            }
            _ => Err(ReleaseError::missing_env(key)),
        }
    }

    /// Check if running in CI environment
    pub fn is_ci() -> bool {
        env::var("CI").is_ok() || env::var("CONTINUOUS_INTEGRATION").is_ok()
    }

    /// Check if running in GitLab CI
    pub fn is_gitlab_ci() -> bool {
        env::var("GITLAB_CI").is_ok()
    }
}
