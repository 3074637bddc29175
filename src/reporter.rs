//! Delivery of rendered output to the console and an optional destination
//! file.

use std::path::Path;

use crate::error::{NotifyOffensesError, Result};

pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print rendered output to stdout unless quiet mode is on.
    pub fn console(&self, rendered: &str) {
        if !self.quiet {
            print!("{rendered}");
        }
    }

    /// Write rendered output to `dest`, trimmed of outer whitespace.
    ///
    /// A missing destination degrades to a warning and a skipped save; the
    /// console output already produced is unaffected. Returns whether the
    /// file was written.
    ///
    /// # Errors
    /// Returns an error if the destination exists but cannot be written.
    pub fn save(&self, dest: Option<&Path>, rendered: &str) -> Result<bool> {
        let Some(dest) = dest else {
            eprintln!("Warning: no destination file path was specified, skipping save");
            return Ok(false);
        };
        std::fs::write(dest, rendered.trim()).map_err(|e| NotifyOffensesError::FileWrite {
            path: dest.to_path_buf(),
            source: e,
        })?;
        if !self.quiet {
            println!("File \"{}\" created.", dest.display());
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
