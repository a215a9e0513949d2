//! Version values carried by the build configuration
//!
//! Typed wrappers for the build number, the version record read from the
//! configuration file and the release tag composed from it.

use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key of the human-readable version declaration
pub const VERSION_NAME_KEY: &str = "versionName";
/// Key of the integer build number declaration
pub const VERSION_CODE_KEY: &str = "versionCode";

/// A positive, monotonically increasing build number (`versionCode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildNumber(u64);

impl BuildNumber {
    /// Create a build number, rejecting zero
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(ReleaseError::invalid_build_number("0"));
        }
        Ok(Self(value))
    }

    /// The raw numeric value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for BuildNumber {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<u64>()
            .map_err(|_| ReleaseError::invalid_build_number(trimmed))?;
        Self::new(value)
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two version fields a release tag is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Human-readable version, quotes stripped (e.g. `6.0.0`)
    pub name: String,
    /// Build number
    pub code: BuildNumber,
}

impl VersionRecord {
    /// Compose the release tag for this record
    pub fn release_tag(&self) -> Result<ReleaseTag> {
        ReleaseTag::new(&self.name, self.code)
    }
}

/// Tag label of the form `<versionName>(<versionCode>)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTag {
    label: String,
}

impl ReleaseTag {
    /// Compose a tag label and check that git will accept it as a ref name
    pub fn new(version_name: &str, code: BuildNumber) -> Result<Self> {
        let label = format!("{version_name}({code})");
        validate_ref_name(&label)
            .map_err(|reason| ReleaseError::malformed(VERSION_NAME_KEY, reason))?;
        Ok(Self { label })
    }

    /// The tag label
    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Subset of `git check-ref-format` rules that apply to a single tag component
fn validate_ref_name(label: &str) -> std::result::Result<(), String> {
    const FORBIDDEN: &[char] = &['~', '^', ':', '?', '*', '[', '\\'];

    if let Some(c) = label
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(c))
    {
        return Err(format!("tag '{label}' contains forbidden character {c:?}"));
    }
    if label.contains("..") || label.contains("@{") {
        return Err(format!("tag '{label}' contains a forbidden sequence"));
    }
    if label.starts_with(['-', '/', '.']) {
        return Err(format!("tag '{label}' has a forbidden leading character"));
    }
    if label.ends_with('.') || label.ends_with('/') || label.ends_with(".lock") {
        return Err(format!("tag '{label}' has a forbidden ending"));
    }
    Ok(())
}
