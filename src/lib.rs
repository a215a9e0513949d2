//! # Release Tools
//!
//! Release automation for the mobile app's GitLab CI pipeline.
//!
//! - `bump-version` sets `versionCode` in the Gradle build configuration to
//!   the pipeline number (`CI_PIPELINE_IID`).
//! - `tag-release` tags HEAD as `<versionName>(<versionCode>)` and pushes the
//!   tags to the remote.
//!
//! Only the two declaration lines are ever touched; every other byte of the
//! build configuration is preserved.
//!
//! ## Example
//!
//! ```no_run
//! use release_tools::core::{BuildNumber, VersionBumper};
//!
//! let bumper = VersionBumper::new()?;
//! let outcome = bumper.bump("buildSrc/src/main/kotlin/Config.kt", BuildNumber::new(42)?, false)?;
//! println!("versionCode {} -> {}", outcome.previous, outcome.current);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
