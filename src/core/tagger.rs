//! Release tagging
//!
//! Reads the version record from the build configuration and publishes the
//! matching tag through a [`TagPublisher`].

use crate::{
    core::{
        declaration::DeclarationScanner,
        vcs::TagPublisher,
        version::{ReleaseTag, VersionRecord},
    },
    error::Result,
    utils::fs::FileSystemUtils,
};
use std::path::Path;
use tracing::{info, instrument};

/// What a tag run should do after composing the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode {
    /// Create the tag and push all tags
    CreateAndPush,
    /// Create the tag locally only
    CreateOnly,
    /// Compose the label and run nothing
    DryRun,
}

/// Result of a tag run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    /// Version fields read from the configuration
    pub record: VersionRecord,
    /// Composed tag
    pub tag: ReleaseTag,
    /// Whether the tag was created
    pub created: bool,
    /// Whether tags were pushed
    pub pushed: bool,
}

/// Creates and publishes the release tag for the current build configuration
pub struct ReleaseTagger<P: TagPublisher> {
    scanner: DeclarationScanner,
    fs_utils: FileSystemUtils,
    publisher: P,
}

impl<P: TagPublisher> ReleaseTagger<P> {
    /// Create a new release tagger publishing through `publisher`
    pub fn new(publisher: P) -> Result<Self> {
        Ok(Self {
            scanner: DeclarationScanner::new()?,
            fs_utils: FileSystemUtils::new(),
            publisher,
        })
    }

    /// Read the version record from `path` and compose its tag
    #[instrument(skip(self))]
    pub fn compose<Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: Q,
    ) -> Result<(VersionRecord, ReleaseTag)> {
        let content = self.fs_utils.read_config(path)?;
        let record = self.scanner.read_record(&content)?;
        let tag = record.release_tag()?;
        Ok((record, tag))
    }

    /// Tag the current commit and push tags to `remote`.
    ///
    /// The push only runs after tag creation has succeeded.
    #[instrument(skip(self))]
    pub fn tag<Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: Q,
        remote: &str,
        mode: TagMode,
    ) -> Result<TagOutcome> {
        let (record, tag) = self.compose(path)?;
        info!(
            "Release {} build {} -> tag {}",
            record.name, record.code, tag
        );

        let mut outcome = TagOutcome {
            record,
            tag,
            created: false,
            pushed: false,
        };

        if mode == TagMode::DryRun {
            info!("Dry run: would create tag {}", outcome.tag);
            info!("Dry run: would push tags to {}", remote);
            return Ok(outcome);
        }

        self.publisher.create_tag(&outcome.tag)?;
        outcome.created = true;
        info!("Created tag {}", outcome.tag);

        if mode == TagMode::CreateAndPush {
            self.publisher.push_tags(remote)?;
            outcome.pushed = true;
            info!("Pushed tags to {}", remote);
        }

        Ok(outcome)
    }

    /// The publisher tags are sent through
    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}
