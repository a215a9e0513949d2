//! Core release functionality
//!
//! Declaration scanning, build number bumping and release tagging.

pub mod bumper;
pub mod declaration;
pub mod tagger;
pub mod vcs;
pub mod version;

pub use bumper::{BumpOutcome, VersionBumper};
pub use declaration::{Declaration, DeclarationScanner};
pub use tagger::{ReleaseTagger, TagMode, TagOutcome};
pub use vcs::{GitCli, TagPublisher};
pub use version::{BuildNumber, ReleaseTag, VersionRecord};
