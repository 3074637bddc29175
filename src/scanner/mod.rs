mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for discovering scannable files under a root path.
pub trait FileScanner {
    /// Collect files under `root`. A file root yields itself when the filter
    /// accepts it.
    ///
    /// # Errors
    /// Returns an error if the walk cannot be performed.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
