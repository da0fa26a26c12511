//! File system utility functions
//!
//! Provides file operations with proper error handling.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Drop `.` components so `./jcanvas.js` and `jcanvas.js` compare equal
pub fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Read file contents as UTF-8; invalid UTF-8 is an `InvalidData` error
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }

    /// Overwrite a file in place, truncating prior content
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Writing file: {}", path.display());
        fs::write(path, contents)?;
        debug!("File written successfully");
        Ok(())
    }

    /// Write a new file, creating parent directories if needed
    #[instrument(skip(self, contents))]
    pub fn create_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
        self.write_file(path, contents)
    }

    /// Check if a path exists and is a file
    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_file()
    }

    /// Expand a glob relative to `root`, returning matching files in sorted order
    #[instrument(skip(self))]
    pub fn glob_files(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, glob::PatternError> {
        let full = root.join(pattern);
        let mut files = Vec::new();

        for path_result in glob::glob(&full.to_string_lossy())? {
            match path_result {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("Skipping non-file match: {}", path.display()),
                Err(e) => warn!("Error reading path for pattern {}: {}", pattern, e),
            }
        }

        files.sort();
        debug!("Pattern {} matched {} files", pattern, files.len());
        Ok(files)
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
