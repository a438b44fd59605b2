//! Service context bundling port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects the loader needs.
///
/// Constructors wire up different adapter implementations: real disk
/// access for the CLI, in-memory fixtures for tests.
pub struct ServiceContext {
    /// Filesystem for reading knowledge and keyword files.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context around a caller-supplied filesystem.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    struct NothingFs;

    impl FileSystem for NothingFs {
        fn read_to_string(
            &self,
            path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Err(format!("File not found: {}", path.display()).into())
        }
    }

    #[test]
    fn with_fs_uses_supplied_adapter() {
        let ctx = ServiceContext::with_fs(Box::new(NothingFs));
        assert!(ctx.fs.read_to_string(Path::new("/anything")).is_err());
    }

    #[test]
    fn live_context_sees_real_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let ctx = ServiceContext::live();
        assert!(ctx.fs.read_to_string(file.path()).unwrap().is_empty());
    }
}
