//! File system utility functions
//!
//! Reads and rewrites the build configuration file with error mapping and logging.

use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Read the build configuration file as text.
    ///
    /// A path that does not resolve to a readable file yields
    /// [`ReleaseError::MissingConfigFile`].
    #[instrument(skip(self))]
    pub fn read_config<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Reading build configuration: {}", path.display());

        if !path.is_file() {
            return Err(ReleaseError::missing_config_file(path, None));
        }

        fs::read_to_string(path).map_err(|e| ReleaseError::from_config_read(path, e))
    }

    /// Overwrite an existing file in place.
    ///
    /// Unlike a create-or-replace write, the target must already exist; the
    /// tools never create a build configuration from scratch.
    #[instrument(skip(self, contents))]
    pub fn overwrite_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> Result<()> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ReleaseError::missing_config_file(path, None));
        }

        debug!("Writing file: {}", path.display());
        fs::write(path, contents).map_err(|e| ReleaseError::file_system("write", path, e))?;
        debug!("File written successfully");
        Ok(())
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
