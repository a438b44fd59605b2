//! Filesystem port for reading configuration data.

use std::path::Path;

/// Provides read access to the files that hold the guidance tables.
///
/// Abstracting the filesystem lets the loader run against in-memory
/// fixtures in tests without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
